pub mod call;
pub mod doctor;
pub mod onboard;
pub mod tools;
