use crate::server::{
    data::customer::CustomerRepository,
    error::AppError,
    model::customer::{CreateCustomerParams, Customer},
    service::auth::AuthService,
    util::password::hash_password,
};

impl<'a> AuthService<'a> {
    /// Registers a new customer account.
    ///
    /// # Returns
    /// - `Ok(Customer)` - The created customer
    /// - `Err(AppError::BadRequest)` - A field failed validation
    /// - `Err(AppError::Conflict)` - The email is already registered
    pub async fn register_customer(
        &self,
        params: CreateCustomerParams,
    ) -> Result<Customer, AppError> {
        params.validate()?;

        let repo = CustomerRepository::new(self.db);

        if repo.email_exists(&params.email, None).await? {
            return Err(AppError::Conflict(format!(
                "Email {} is already registered",
                params.email
            )));
        }

        let password_hash = hash_password(params.password.clone()).await?;
        let customer = repo.create(params, password_hash).await?;

        tracing::info!("Registered customer {}", customer.id);

        Ok(customer)
    }
}
