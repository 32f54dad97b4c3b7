use crate::{
    model::enums::{Language, Sex},
    server::{
        data::veterinarian::VeterinarianRepository,
        model::veterinarian::{CreateVeterinarianParams, UpdateVeterinarianParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
