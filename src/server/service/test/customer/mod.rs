use crate::server::{
    error::AppError, model::customer::UpdateCustomerParams, service::customer::CustomerService,
};
use test_utils::{builder::TestBuilder, factory};

mod get_by_id;
mod update;

fn empty_update(id: i32) -> UpdateCustomerParams {
    UpdateCustomerParams {
        id,
        first_name: None,
        last_name: None,
        email: None,
        password: None,
        contact_number: None,
    }
}
