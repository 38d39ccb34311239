use rust_decimal::Decimal;

use crate::domain::entities::{Item, NewItem, NewUser, User};
use crate::domain::Record;
use crate::errors::DomainError;
use crate::repositories::{RecordRepository, Repositories};

use super::{MessagingService, SendMessage};

struct Fixture {
    repos: Repositories,
    messaging: MessagingService,
}

fn fixture() -> Fixture {
    let repos = Repositories::in_memory();
    let messaging = MessagingService::new(
        repos.messages.clone(),
        repos.inbox.clone(),
        repos.users.clone(),
        repos.listings.clone(),
    );
    Fixture { repos, messaging }
}

async fn user(f: &Fixture, n: u32) -> User {
    f.repos
        .users
        .create(User::from_new(NewUser {
            phone: Some(format!("0912000000{n}")),
            first_name: "User".to_string(),
            last_name: format!("N{n}"),
            national_code: "0012345678".to_string(),
            gender: "M".to_string(),
            date_of_birth: chrono::NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            email: format!("u{n}@x.io"),
            home_phone: None,
            description: None,
        }))
        .await
        .unwrap()
}

async fn listing(f: &Fixture, owner: &User) -> Item {
    f.repos
        .listings
        .create(Item::from_new(NewItem {
            owner_id: owner.user_id,
            name: format!("House of {}", owner.user_id),
            price: Decimal::from(80),
            about: None,
        }))
        .await
        .unwrap()
}

fn text(receiver: &User, item: &Item) -> SendMessage {
    SendMessage {
        receiver_id: receiver.user_id,
        item_id: item.item_id,
        text: "Hello, is parking available?".to_string(),
    }
}

#[tokio::test]
async fn test_send_uses_caller_as_sender() {
    let f = fixture();
    let host = user(&f, 1).await;
    let guest = user(&f, 2).await;
    let house = listing(&f, &host).await;

    let message = f.messaging.send(&guest, text(&host, &house)).await.unwrap();

    assert_eq!(message.sender_id, guest.user_id);
    assert_eq!(message.receiver_id, host.user_id);
}

#[tokio::test]
async fn test_send_to_unknown_listing_is_not_found() {
    let f = fixture();
    let host = user(&f, 1).await;
    let guest = user(&f, 2).await;
    let mut message = SendMessage {
        receiver_id: host.user_id,
        item_id: 77,
        text: "hi".to_string(),
    };

    assert!(matches!(
        f.messaging.send(&guest, message.clone()).await,
        Err(DomainError::NotFound { .. })
    ));

    message.receiver_id = 99;
    assert!(f.messaging.send(&guest, message).await.is_err());
}

#[tokio::test]
async fn test_blank_message_is_rejected() {
    let f = fixture();
    let host = user(&f, 1).await;
    let guest = user(&f, 2).await;
    let house = listing(&f, &host).await;
    let mut message = text(&host, &house);
    message.text = " ".to_string();

    assert!(matches!(
        f.messaging.send(&guest, message).await,
        Err(DomainError::ValidationErr(_))
    ));
}

#[tokio::test]
async fn test_host_reads_inbox_and_conversation() {
    let f = fixture();
    let host = user(&f, 1).await;
    let guest = user(&f, 2).await;
    let other = user(&f, 3).await;
    let house = listing(&f, &host).await;

    f.messaging.send(&guest, text(&host, &house)).await.unwrap();
    f.messaging.send(&other, text(&host, &house)).await.unwrap();

    assert_eq!(f.messaging.inbox(host.user_id, &host).await.unwrap().len(), 2);
    let conversation = f
        .messaging
        .conversation(host.user_id, guest.user_id, &host)
        .await
        .unwrap();
    assert_eq!(conversation.len(), 1);
    assert_eq!(conversation[0].sender_id, guest.user_id);
}

#[tokio::test]
async fn test_other_users_cannot_read_inbox() {
    let f = fixture();
    let host = user(&f, 1).await;
    let guest = user(&f, 2).await;

    assert!(matches!(
        f.messaging.inbox(host.user_id, &guest).await,
        Err(DomainError::Forbidden { .. })
    ));
    assert!(matches!(
        f.messaging
            .conversation(host.user_id, guest.user_id, &guest)
            .await,
        Err(DomainError::Forbidden { .. })
    ));
}
