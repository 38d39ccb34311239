//! Domain entities representing core business objects.

pub mod booking;
pub mod feedback;
pub mod listing;
pub mod message;
pub mod token;
pub mod user;

pub use booking::{
    Application, ApplicationPatch, ApplicationStatus, Invoice, InvoiceLine, InvoiceLinePatch,
    InvoicePatch, InvoiceStatus, NewApplication, NewInvoice, NewInvoiceLine, NewPayment,
    NewReservation, Payment, PaymentPatch, Reservation, ReservationPatch,
};
pub use feedback::{
    CommentPatch, CommentSection, Like, LikePatch, NewComment, NewLike, NewRate, NewRating, Rate,
    RatePatch, Rating, RatingPatch,
};
pub use listing::{
    Feature, FeaturePatch, Item, ItemDescription, ItemDescriptionPatch, ItemPatch, Location,
    LocationPatch, NewFeature, NewItem, NewItemDescription, NewLocation, NewOpenClose,
    NewProperty, NewRule, NewType, NewTypeList, OpenClose, OpenClosePatch, Property,
    PropertyPatch, Rule, RulePatch, Type, TypeList, TypeListPatch, TypePatch,
};
pub use message::{Message, MessagePatch, NewMessage};
pub use token::Claims;
pub use user::{NewUser, User, UserPatch};
