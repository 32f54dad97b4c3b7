use crate::{
    model::auth::Role,
    server::{
        data::{customer::CustomerRepository, veterinarian::VeterinarianRepository},
        error::{auth::AuthError, AppError},
        model::auth::IssuedToken,
        service::auth::AuthService,
        util::password::verify_password,
    },
};

impl<'a> AuthService<'a> {
    /// Checks customer credentials and issues a bearer token.
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Token with `customer` role
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login_customer(
        &self,
        email: &str,
        password: &str,
    ) -> Result<IssuedToken, AppError> {
        let email = email.trim().to_lowercase();
        let customer = CustomerRepository::new(self.db)
            .find_by_email(&email)
            .await?;

        let Some(customer) = customer else {
            return Err(AuthError::InvalidCredentials.into());
        };

        self.check_password(password, customer.password_hash)
            .await?;

        self.issue(Role::Customer, customer.id)
    }

    /// Checks veterinarian credentials and issues a bearer token.
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Token with `veterinarian` role
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login_veterinarian(
        &self,
        email: &str,
        password: &str,
    ) -> Result<IssuedToken, AppError> {
        let email = email.trim().to_lowercase();
        let veterinarian = VeterinarianRepository::new(self.db)
            .find_by_email(&email)
            .await?;

        let Some(veterinarian) = veterinarian else {
            return Err(AuthError::InvalidCredentials.into());
        };

        self.check_password(password, veterinarian.password_hash)
            .await?;

        self.issue(Role::Veterinarian, veterinarian.id)
    }

    async fn check_password(&self, password: &str, hash: String) -> Result<(), AppError> {
        if !verify_password(password.to_string(), hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(())
    }

    fn issue(&self, role: Role, subject_id: i32) -> Result<IssuedToken, AppError> {
        let (token, claims) = self.tokens.issue(role, subject_id)?;

        tracing::debug!("Issued token {} for {:?} {}", claims.jti, role, subject_id);

        Ok(IssuedToken {
            token,
            claims,
            subject_id,
            expires_in: self.tokens.ttl().num_seconds(),
        })
    }
}
