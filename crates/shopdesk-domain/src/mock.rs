//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::auth::{
    AuthGateway, AuthResponse, AuthSession, LoginRequest, RegisterRequest, SessionStore,
};
use crate::catalog::{
    Category, CategoryRepository, CreateCategoryRequest, CreateProductRequest,
    CreateProviderRequest, CreateSubcategoryRequest, Product, ProductRepository, Provider,
    ProviderRepository, Subcategory, SubcategoryRepository, UpdateCategoryRequest,
    UpdateProductRequest, UpdateProviderRequest, UpdateSubcategoryRequest,
};
use crate::dashboard::{MonthlySales, SalesReportRepository};
use crate::drive::{ImageProbe, PickerBackend, PickerOutcome};
use crate::order::{OrderRecord, OrderRepository};
use crate::shared::{DomainError, EntityId};

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn find_all(&self) -> Result<Vec<Category>, DomainError>;
        async fn find_by_id(&self, id: EntityId) -> Result<Category, DomainError>;
        async fn create(&self, request: &CreateCategoryRequest) -> Result<Category, DomainError>;
        async fn update(&self, request: &UpdateCategoryRequest) -> Result<Category, DomainError>;
        async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
    }
}

mock! {
    pub SubcategoryRepo {}

    #[async_trait]
    impl SubcategoryRepository for SubcategoryRepo {
        async fn find_all(&self) -> Result<Vec<Subcategory>, DomainError>;
        async fn find_by_id(&self, id: EntityId) -> Result<Subcategory, DomainError>;
        async fn create(
            &self,
            request: &CreateSubcategoryRequest,
        ) -> Result<Subcategory, DomainError>;
        async fn update(
            &self,
            request: &UpdateSubcategoryRequest,
        ) -> Result<Subcategory, DomainError>;
        async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn find_all(&self) -> Result<Vec<Product>, DomainError>;
        async fn find_by_id(&self, id: EntityId) -> Result<Product, DomainError>;
        async fn create(&self, request: &CreateProductRequest) -> Result<Product, DomainError>;
        async fn update(&self, request: &UpdateProductRequest) -> Result<Product, DomainError>;
        async fn delete(&self, id: EntityId) -> Result<String, DomainError>;
    }
}

mock! {
    pub ProviderRepo {}

    #[async_trait]
    impl ProviderRepository for ProviderRepo {
        async fn find_all(&self) -> Result<Vec<Provider>, DomainError>;
        async fn find_by_id(&self, id: EntityId) -> Result<Provider, DomainError>;
        async fn create(&self, request: &CreateProviderRequest) -> Result<Provider, DomainError>;
        async fn update(&self, request: &UpdateProviderRequest) -> Result<Provider, DomainError>;
        async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
    }
}

mock! {
    pub OrderRepo {}

    #[async_trait]
    impl OrderRepository for OrderRepo {
        async fn find_all(&self) -> Result<Vec<OrderRecord>, DomainError>;
    }
}

mock! {
    pub SalesReportRepo {}

    #[async_trait]
    impl SalesReportRepository for SalesReportRepo {
        async fn monthly_sales(&self) -> Result<Vec<MonthlySales>, DomainError>;
    }
}

mock! {
    pub AuthApi {}

    #[async_trait]
    impl AuthGateway for AuthApi {
        async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, DomainError>;
        async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, DomainError>;
    }
}

mock! {
    pub SessionStorage {}

    impl SessionStore for SessionStorage {
        fn load(&self) -> Result<Option<AuthSession>, DomainError>;
        fn save(&self, session: &AuthSession) -> Result<(), DomainError>;
        fn clear(&self) -> Result<(), DomainError>;
    }
}

mock! {
    pub Picker {}

    #[async_trait]
    impl PickerBackend for Picker {
        async fn load_library(&self) -> Result<(), DomainError>;
        fn is_ready(&self) -> bool;
        async fn request_access_token(&self) -> Result<String, DomainError>;
        async fn open_picker(&self, access_token: &str) -> Result<PickerOutcome, DomainError>;
    }
}

mock! {
    pub Probe {}

    #[async_trait]
    impl ImageProbe for Probe {
        async fn loads(&self, url: &str) -> bool;
    }
}
