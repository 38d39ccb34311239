use rust_decimal::Decimal;

use crate::domain::entities::{Item, Message, NewItem, NewMessage};
use crate::domain::Record;
use crate::repositories::message::{InMemoryInboxRepository, InboxRepository};
use crate::repositories::record::{InMemoryRepository, RecordRepository};

struct Fixture {
    messages: InMemoryRepository<Message>,
    items: InMemoryRepository<Item>,
    inbox: InMemoryInboxRepository,
}

fn fixture() -> Fixture {
    let messages = InMemoryRepository::new();
    let items = InMemoryRepository::new();
    let inbox = InMemoryInboxRepository::new(messages.clone(), items.clone());
    Fixture {
        messages,
        items,
        inbox,
    }
}

async fn listing(f: &Fixture, owner_id: i64, name: &str) -> Item {
    f.items
        .create(Item::from_new(NewItem {
            owner_id,
            name: name.to_string(),
            price: Decimal::from(10),
            about: None,
        }))
        .await
        .unwrap()
}

async fn send(f: &Fixture, sender_id: i64, receiver_id: i64, item_id: i64) -> Message {
    f.messages
        .create(Message::from_new(NewMessage {
            sender_id,
            receiver_id,
            item_id,
            text: "Is it free next week?".to_string(),
        }))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_inbox_keeps_messages_about_hosts_own_listings() {
    let f = fixture();
    let own = listing(&f, 1, "Villa").await;
    let foreign = listing(&f, 9, "Cabin").await;

    let kept = send(&f, 2, 1, own.item_id).await;
    send(&f, 2, 1, foreign.item_id).await;
    send(&f, 2, 9, foreign.item_id).await;

    assert_eq!(f.inbox.inbox(1, None).await.unwrap(), vec![kept]);
}

#[tokio::test]
async fn test_inbox_narrowed_to_sender() {
    let f = fixture();
    let own = listing(&f, 1, "Villa").await;

    let from_two = send(&f, 2, 1, own.item_id).await;
    send(&f, 3, 1, own.item_id).await;

    assert_eq!(f.inbox.inbox(1, Some(2)).await.unwrap(), vec![from_two]);
    assert_eq!(f.inbox.inbox(1, None).await.unwrap().len(), 2);
    assert!(f.inbox.inbox(1, Some(4)).await.unwrap().is_empty());
}
