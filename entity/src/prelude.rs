pub use super::aircraft::Entity as Aircraft;
