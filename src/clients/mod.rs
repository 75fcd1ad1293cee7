pub mod weather_client;

pub use weather_client::{OpenWeatherClient, WeatherProvider};
