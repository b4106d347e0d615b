//! Domain models for the Garden Platform.

pub mod cart;
pub mod catalog;
pub mod contact_page;
pub mod content;
pub mod homepage;
pub mod order_request;
pub mod post;
pub mod review;
pub mod service_page;
pub mod settings;
pub mod team_member;
pub mod upload;

pub use cart::Cart;
pub use catalog::{CatalogService, ServiceCategory};
pub use contact_page::ContactPage;
pub use content::CmsRecord;
pub use homepage::Homepage;
pub use order_request::{OrderRequest, OrderStatus};
pub use post::Post;
pub use review::{Review, ReviewStatus};
pub use service_page::ServicePage;
pub use settings::{IntegrationSettings, SettingsDocument};
pub use team_member::TeamMember;
pub use upload::UploadedImage;
