pub mod info;
pub mod mock_provider;
pub mod song;
