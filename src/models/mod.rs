pub mod company;
pub mod logo;
pub mod quote;

pub use company::Company;
pub use logo::{Logo, LogoFormat};
pub use quote::{PriceTrend, Quote};
