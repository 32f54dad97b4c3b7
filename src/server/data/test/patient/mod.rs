use crate::{
    model::enums::{Sex, Species},
    server::{
        data::patient::PatientRepository,
        model::patient::{CreatePatientParams, UpdatePatientParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod update;
