use crate::server::{
    data::token_blocklist::TokenBlocklistRepository, error::AppError, model::auth::Claims,
    service::auth::AuthService,
};

impl<'a> AuthService<'a> {
    /// Revokes the token carrying these claims.
    ///
    /// Revoking an already revoked token is a no-op.
    pub async fn logout(&self, claims: &Claims) -> Result<(), AppError> {
        let repo = TokenBlocklistRepository::new(self.db);

        if !repo.is_revoked(&claims.jti).await? {
            repo.revoke(&claims.jti).await?;
        }

        Ok(())
    }
}
