use crate::core::Repository;
use crate::entities::User;

specialized_repository!(
    /// Users, looked up by phone number at login
    UserRepository,
    User
);

impl UserRepository {
    pub async fn find_by_phone(&self, phone: &str) -> Option<User> {
        self.find_one_where(&|user: &User| user.phone == phone).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryRepository;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_find_by_phone() {
        let users = UserRepository::new(Arc::new(InMemoryRepository::new()));
        let wang = users.save(User::new("Wang", "13512345678")).await.unwrap();
        users.save(User::new("Li", "13800138000")).await.unwrap();

        assert_eq!(users.find_by_phone("13512345678").await, Some(wang));
        assert_eq!(users.find_by_phone("10000000000").await, None);
    }
}
