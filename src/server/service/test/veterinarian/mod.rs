use crate::{
    model::enums::{Language, Sex},
    server::{
        error::AppError,
        model::veterinarian::{CreateVeterinarianParams, UpdateVeterinarianParams},
        service::veterinarian::VeterinarianService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod update;

fn create_params(email: &str) -> CreateVeterinarianParams {
    CreateVeterinarianParams {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        password: "JaneDoe12!".to_string(),
        description: None,
        sex: Sex::Female,
        languages: vec![Language::English],
        is_admin: false,
    }
}
