use crate::core::KeyValueStore;
use crate::domain::model::Account;
use crate::utils::error::{Result, TravelError};
use crate::utils::validation::require_input;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use uuid::Uuid;

pub const USERS_KEY: &str = "users";
pub const CURRENT_USER_KEY: &str = "currentUser";
pub const MIN_PASSWORD_LEN: usize = 6;

const DEMO_NAME: &str = "Demo User";
const DEMO_EMAIL: &str = "demo@travel.com";
const DEMO_PASSWORD: &str = "demo123";

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

fn new_account(name: &str, email: &str, password: &str) -> Account {
    let salt = Uuid::new_v4().simple().to_string();
    Account {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: hash_password(&salt, password),
        salt,
    }
}

impl Account {
    pub fn verify_password(&self, password: &str) -> bool {
        hash_password(&self.salt, password)
            .as_bytes()
            .ct_eq(self.password_hash.as_bytes())
            .into()
    }
}

/// 帳號與目前登入者；密碼只存 salted SHA-256
pub struct AccountStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> AccountStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Vec<Account>> {
        match self.store.get(USERS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => {
                tracing::info!("Account store empty, seeding demo account");
                let seeded = vec![new_account(DEMO_NAME, DEMO_EMAIL, DEMO_PASSWORD)];
                self.save(&seeded)?;
                Ok(seeded)
            }
        }
    }

    fn save(&self, accounts: &[Account]) -> Result<()> {
        self.store.set(USERS_KEY, &serde_json::to_string(accounts)?)
    }

    fn set_current(&self, account: &Account) -> Result<()> {
        self.store
            .set(CURRENT_USER_KEY, &serde_json::to_string(account)?)
    }

    pub fn accounts(&self) -> Result<Vec<Account>> {
        self.load()
    }

    /// Creates the account and signs it in. Checks run in order:
    /// password mismatch, password length, duplicate email.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Account> {
        let name = require_input("your name", name)?;
        let email = require_input("an email address", email)?;

        if password != confirm_password {
            return Err(TravelError::validation("Passwords do not match!"));
        }

        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(TravelError::validation(format!(
                "Password must be at least {} characters long!",
                MIN_PASSWORD_LEN
            )));
        }

        let mut accounts = self.load()?;
        if accounts.iter().any(|a| a.email == email) {
            tracing::debug!("Rejected duplicate registration for {}", email);
            return Err(TravelError::validation(
                "User with this email already exists!",
            ));
        }

        let account = new_account(&name, &email, password);
        accounts.push(account.clone());
        self.save(&accounts)?;
        self.set_current(&account)?;

        tracing::info!("Registered account {}", account.email);
        Ok(account)
    }

    pub fn login(&self, email: &str, password: &str) -> Result<Account> {
        let email = email.trim();
        let account = self
            .load()?
            .into_iter()
            .find(|a| a.email == email && a.verify_password(password))
            .ok_or_else(|| TravelError::validation("Invalid email or password"))?;

        self.set_current(&account)?;
        Ok(account)
    }

    pub fn current_user(&self) -> Result<Option<Account>> {
        match self.store.get(CURRENT_USER_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn logout(&self) -> Result<()> {
        self.store.remove(CURRENT_USER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryStore;

    #[test]
    fn test_demo_account_seeded() {
        let store = MemoryStore::new();
        let accounts = AccountStore::new(&store);

        let all = accounts.accounts().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].email, "demo@travel.com");

        let demo = accounts.login("demo@travel.com", "demo123").unwrap();
        assert_eq!(demo.name, "Demo User");
    }

    #[test]
    fn test_passwords_are_not_stored_in_plaintext() {
        let store = MemoryStore::new();
        let accounts = AccountStore::new(&store);

        accounts
            .register("Asha", "asha@example.com", "secret99", "secret99")
            .unwrap();

        let raw = store.get(USERS_KEY).unwrap().unwrap();
        assert!(!raw.contains("secret99"));
        assert!(!raw.contains("demo123"));
    }

    #[test]
    fn test_verify_password_rejects_near_misses() {
        let account = new_account("Asha", "asha@example.com", "secret99");

        assert!(account.verify_password("secret99"));
        assert!(!account.verify_password("secret9"));
        assert!(!account.verify_password("secret999"));
        assert!(!account.verify_password(""));

        let mut tampered = account.clone();
        tampered.password_hash.pop();
        assert!(!tampered.verify_password("secret99"));
    }

    #[test]
    fn test_register_then_login() {
        let store = MemoryStore::new();
        let accounts = AccountStore::new(&store);

        let created = accounts
            .register("Asha", "asha@example.com", "secret99", "secret99")
            .unwrap();
        assert_eq!(accounts.current_user().unwrap(), Some(created.clone()));

        accounts.logout().unwrap();
        assert_eq!(accounts.current_user().unwrap(), None);

        let logged_in = accounts.login("asha@example.com", "secret99").unwrap();
        assert_eq!(logged_in, created);
        assert_eq!(accounts.current_user().unwrap(), Some(created));
    }

    #[test]
    fn test_duplicate_email_rejected_without_change() {
        let store = MemoryStore::new();
        let accounts = AccountStore::new(&store);

        accounts
            .register("Asha", "asha@example.com", "secret99", "secret99")
            .unwrap();
        let before = store.get(USERS_KEY).unwrap();

        let err = accounts
            .register("Other", "asha@example.com", "another1", "another1")
            .unwrap_err();
        assert!(matches!(err, TravelError::ValidationError { .. }));
        assert_eq!(err.user_friendly_message(), "User with this email already exists!");
        assert_eq!(store.get(USERS_KEY).unwrap(), before);
        assert_eq!(accounts.accounts().unwrap().len(), 2);
    }

    #[test]
    fn test_register_validation_order() {
        let store = MemoryStore::new();
        let accounts = AccountStore::new(&store);

        // Mismatch is reported before length
        let err = accounts
            .register("Asha", "demo@travel.com", "abc", "abd")
            .unwrap_err();
        assert_eq!(err.user_friendly_message(), "Passwords do not match!");

        // Length is reported before the duplicate check
        let err = accounts
            .register("Asha", "demo@travel.com", "abc", "abc")
            .unwrap_err();
        assert_eq!(
            err.user_friendly_message(),
            "Password must be at least 6 characters long!"
        );

        assert!(matches!(
            accounts.register("Asha", " ", "secret99", "secret99"),
            Err(TravelError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_login_failures() {
        let store = MemoryStore::new();
        let accounts = AccountStore::new(&store);

        for (email, password) in [
            ("demo@travel.com", "wrong"),
            ("nobody@travel.com", "demo123"),
        ] {
            let err = accounts.login(email, password).unwrap_err();
            assert_eq!(err.user_friendly_message(), "Invalid email or password");
        }
        assert_eq!(accounts.current_user().unwrap(), None);
    }
}
