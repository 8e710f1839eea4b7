pub mod chat;
pub mod custom_request;
pub mod designers;
pub mod home;
pub mod item_details;

pub use chat::ChatView;
pub use custom_request::CustomRequestView;
pub use designers::DesignersView;
pub use home::HomeView;
pub use item_details::ItemDetailsView;
