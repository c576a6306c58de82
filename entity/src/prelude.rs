pub use super::wallet::Entity as Wallet;
