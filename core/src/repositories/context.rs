//! The set of repositories a request handler can reach.

use std::sync::Arc;

use crate::domain::entities::{
    Application, CommentSection, Feature, Invoice, InvoiceLine, Item, ItemDescription, Like,
    Location, Message, OpenClose, Payment, Property, Rate, Rating, Reservation, Rule, Type,
    TypeList, User,
};
use crate::domain::Record;

use super::booking::{InMemoryTravelRepository, TravelRepository};
use super::listing::{InMemoryListingRepository, ListingRepository};
use super::message::{InMemoryInboxRepository, InboxRepository};
use super::record::{InMemoryRepository, RecordRepository};
use super::user::UserRepository;

/// Repositories backing the services.
///
/// Built once at startup (MySQL or in-memory) and shared by cloning; every
/// field is a cheap `Arc`.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub listings: Arc<dyn ListingRepository>,
    pub inbox: Arc<dyn InboxRepository>,
    pub travels: Arc<dyn TravelRepository>,
    pub locations: Arc<dyn RecordRepository<Location>>,
    pub type_lists: Arc<dyn RecordRepository<TypeList>>,
    pub types: Arc<dyn RecordRepository<Type>>,
    pub features: Arc<dyn RecordRepository<Feature>>,
    pub open_close: Arc<dyn RecordRepository<OpenClose>>,
    pub rules: Arc<dyn RecordRepository<Rule>>,
    pub ratings: Arc<dyn RecordRepository<Rating>>,
    pub rates: Arc<dyn RecordRepository<Rate>>,
    pub properties: Arc<dyn RecordRepository<Property>>,
    pub item_descriptions: Arc<dyn RecordRepository<ItemDescription>>,
    pub messages: Arc<dyn RecordRepository<Message>>,
    pub likes: Arc<dyn RecordRepository<Like>>,
    pub comments: Arc<dyn RecordRepository<CommentSection>>,
    pub reservations: Arc<dyn RecordRepository<Reservation>>,
    pub applications: Arc<dyn RecordRepository<Application>>,
    pub invoices: Arc<dyn RecordRepository<Invoice>>,
    pub payments: Arc<dyn RecordRepository<Payment>>,
    pub invoice_lines: Arc<dyn RecordRepository<InvoiceLine>>,
}

impl Repositories {
    /// Repositories over in-memory tables; the join repositories share the
    /// tables of the entities they read.
    pub fn in_memory() -> Self {
        let items = InMemoryRepository::<Item>::new();
        let locations = InMemoryRepository::<Location>::new();
        let messages = InMemoryRepository::<Message>::new();
        let reservations = InMemoryRepository::<Reservation>::new();
        let applications = InMemoryRepository::<Application>::new();
        let invoices = InMemoryRepository::<Invoice>::new();

        Self {
            users: Arc::new(InMemoryRepository::<User>::new()),
            listings: Arc::new(InMemoryListingRepository::new(
                items.clone(),
                locations.clone(),
            )),
            inbox: Arc::new(InMemoryInboxRepository::new(messages.clone(), items)),
            travels: Arc::new(InMemoryTravelRepository::new(
                reservations.clone(),
                applications.clone(),
                invoices.clone(),
            )),
            locations: Arc::new(locations),
            type_lists: Arc::new(InMemoryRepository::<TypeList>::new()),
            types: Arc::new(InMemoryRepository::<Type>::new()),
            features: Arc::new(InMemoryRepository::<Feature>::new()),
            open_close: Arc::new(InMemoryRepository::<OpenClose>::new()),
            rules: Arc::new(InMemoryRepository::<Rule>::new()),
            ratings: Arc::new(InMemoryRepository::<Rating>::new()),
            rates: Arc::new(InMemoryRepository::<Rate>::new()),
            properties: Arc::new(InMemoryRepository::<Property>::new()),
            item_descriptions: Arc::new(InMemoryRepository::<ItemDescription>::new()),
            messages: Arc::new(messages),
            likes: Arc::new(InMemoryRepository::<Like>::new()),
            comments: Arc::new(InMemoryRepository::<CommentSection>::new()),
            reservations: Arc::new(reservations),
            applications: Arc::new(applications),
            invoices: Arc::new(invoices),
            payments: Arc::new(InMemoryRepository::<Payment>::new()),
            invoice_lines: Arc::new(InMemoryRepository::<InvoiceLine>::new()),
        }
    }

    /// Repository of an entity served by the generic record endpoints
    pub fn of<E>(&self) -> Arc<dyn RecordRepository<E>>
    where
        E: Record,
        Self: RepositoryFor<E>,
    {
        <Self as RepositoryFor<E>>::repository(self)
    }
}

/// Selects the repository field holding entity `E`
pub trait RepositoryFor<E: Record> {
    fn repository(&self) -> Arc<dyn RecordRepository<E>>;
}

macro_rules! repository_for {
    ($($entity:ty => $field:ident),+ $(,)?) => {
        $(
            impl RepositoryFor<$entity> for Repositories {
                fn repository(&self) -> Arc<dyn RecordRepository<$entity>> {
                    Arc::clone(&self.$field)
                }
            }
        )+
    };
}

repository_for! {
    Location => locations,
    TypeList => type_lists,
    Type => types,
    Feature => features,
    OpenClose => open_close,
    Rule => rules,
    Rating => ratings,
    Rate => rates,
    Property => properties,
    ItemDescription => item_descriptions,
    Message => messages,
    Like => likes,
    CommentSection => comments,
    Reservation => reservations,
    Application => applications,
    Invoice => invoices,
    Payment => payments,
    InvoiceLine => invoice_lines,
}
