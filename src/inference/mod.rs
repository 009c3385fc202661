pub mod gateway;

pub use gateway::{InferenceGateway, RoboflowGateway};
