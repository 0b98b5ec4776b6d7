//! Domain models

mod drink;
mod session;
mod vendor;

pub use drink::{
    CustomizationOption, Drink, DrinkCategory, DrinkCustomization, DrinkSelection,
};
pub use session::{Session, SessionOrder, SessionUser};
pub use vendor::VendorRef;
