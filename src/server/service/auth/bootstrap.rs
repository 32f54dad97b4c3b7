use crate::{
    model::enums::Sex,
    server::{
        config::AdminBootstrap,
        data::veterinarian::VeterinarianRepository,
        error::AppError,
        model::veterinarian::{
            CreateVeterinarianParams, UpdateVeterinarianParams, Veterinarian,
        },
        service::auth::AuthService,
        util::password::hash_password,
    },
};

impl<'a> AuthService<'a> {
    /// Ensures an admin veterinarian exists.
    ///
    /// Does nothing when any admin is present. Otherwise promotes the veterinarian with the
    /// configured email, or creates one with the configured credentials.
    ///
    /// # Returns
    /// - `Ok(Some(Veterinarian))` - The admin that was promoted or created
    /// - `Ok(None)` - An admin already existed
    /// - `Err(AppError::BadRequest)` - The configured credentials fail validation
    pub async fn bootstrap_admin(
        &self,
        admin: &AdminBootstrap,
    ) -> Result<Option<Veterinarian>, AppError> {
        let repo = VeterinarianRepository::new(self.db);

        if repo.admin_exists().await? {
            return Ok(None);
        }

        let email = admin.email.trim().to_lowercase();

        if let Some(existing) = repo.find_by_email(&email).await? {
            let promoted = repo
                .update(
                    UpdateVeterinarianParams {
                        id: existing.id,
                        first_name: None,
                        last_name: None,
                        email: None,
                        password: None,
                        description: None,
                        sex: None,
                        languages: None,
                        is_admin: Some(true),
                    },
                    None,
                )
                .await?;

            return Ok(promoted);
        }

        let params = CreateVeterinarianParams {
            first_name: admin.first_name.clone(),
            last_name: admin.last_name.clone(),
            email,
            password: admin.password.clone(),
            description: None,
            sex: Sex::Female,
            languages: Vec::new(),
            is_admin: true,
        };
        params.validate()?;

        let password_hash = hash_password(params.password.clone()).await?;
        let created = repo.create(params, password_hash).await?;

        Ok(Some(created))
    }
}
