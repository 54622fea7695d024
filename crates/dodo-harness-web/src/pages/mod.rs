//! Page Components

mod cancel;
mod home;
mod payment_test;
mod success;

pub use cancel::PaymentCancelPage;
pub use home::HomePage;
pub use payment_test::PaymentTestPage;
pub use success::PaymentSuccessPage;
