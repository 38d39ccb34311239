use rust_decimal::Decimal;

use crate::domain::entities::{Item, NewItem, User};
use crate::domain::Record;
use crate::errors::DomainError;
use crate::repositories::{RecordRepository, Repositories};

use super::FavoriteService;

fn guest(user_id: i64) -> User {
    User {
        user_id,
        phone: Some("09121111111".to_string()),
        first_name: "Guest".to_string(),
        last_name: "Traveler".to_string(),
        national_code: "0012345678".to_string(),
        gender: "F".to_string(),
        date_of_birth: chrono::NaiveDate::from_ymd_opt(1999, 9, 9).unwrap(),
        email: format!("guest{user_id}@x.io"),
        home_phone: None,
        description: None,
    }
}

async fn setup() -> (FavoriteService, Item) {
    let repos = Repositories::in_memory();
    let item = repos
        .listings
        .create(Item::from_new(NewItem {
            owner_id: 1,
            name: "Loft".to_string(),
            price: Decimal::from(60),
            about: None,
        }))
        .await
        .unwrap();
    (
        FavoriteService::new(repos.likes.clone(), repos.listings.clone()),
        item,
    )
}

#[tokio::test]
async fn test_add_list_remove() {
    let (favorites, item) = setup().await;
    let user = guest(5);

    let like = favorites.add(&user, item.item_id).await.unwrap();
    assert_eq!(favorites.list(&user).await.unwrap(), vec![like.clone()]);
    assert!(favorites.list(&guest(6)).await.unwrap().is_empty());

    assert_eq!(favorites.remove(&user, item.item_id).await.unwrap(), like);
    assert!(favorites.list(&user).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_adding_twice_conflicts() {
    let (favorites, item) = setup().await;
    let user = guest(5);
    favorites.add(&user, item.item_id).await.unwrap();

    let err = favorites.add(&user, item.item_id).await.unwrap_err();

    assert_eq!(err.to_string(), "Item is already in favorites");
}

#[tokio::test]
async fn test_add_unknown_listing_is_not_found() {
    let (favorites, _) = setup().await;
    assert!(matches!(
        favorites.add(&guest(5), 404).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_remove_missing_favorite_is_not_found() {
    let (favorites, item) = setup().await;
    assert!(matches!(
        favorites.remove(&guest(5), item.item_id).await,
        Err(DomainError::NotFound { .. })
    ));
}
