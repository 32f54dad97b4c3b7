use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        appointment::{AppointmentDto, BookAppointmentDto, UpdateAppointmentDto},
        auth::{LoginDto, Role, TokenDto},
        customer::{CustomerDto, CustomerSummaryDto, RegisterCustomerDto, UpdateCustomerDto},
        enums::{Language, Sex, Species},
        patient::{
            PatientAppointmentDto, PatientDto, PatientSummaryDto, RegisterPatientDto,
            UpdatePatientDto,
        },
        veterinarian::{
            CreateVeterinarianDto, UpdateVeterinarianDto, VeterinarianDto, VeterinarianSummaryDto,
        },
    },
    server::{
        controller::{
            appointment::{
                self, book_appointment, delete_appointment, get_all_appointments,
                get_appointment, get_appointments, update_appointment, APPOINTMENT_TAG,
            },
            auth::{self, login_customer, login_veterinarian, logout, register_customer, AUTH_TAG},
            customer::{
                self, delete_customer, get_customer, get_customers, update_customer, CUSTOMER_TAG,
            },
            patient::{
                self, delete_patient, get_patient, get_patients, register_patient, update_patient,
                PATIENT_TAG,
            },
            veterinarian::{
                self, delete_veterinarian, get_veterinarian, get_veterinarians,
                register_veterinarian, update_veterinarian, VETERINARIAN_TAG,
            },
        },
        error::AppError,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Vet Clinic API", description = "Customers, veterinarians, patients and appointments"),
    paths(
        auth::register_customer,
        auth::login_customer,
        auth::login_veterinarian,
        auth::logout,
        customer::get_customers,
        customer::get_customer,
        customer::update_customer,
        customer::delete_customer,
        veterinarian::get_veterinarians,
        veterinarian::get_veterinarian,
        veterinarian::register_veterinarian,
        veterinarian::update_veterinarian,
        veterinarian::delete_veterinarian,
        patient::get_patients,
        patient::get_patient,
        patient::register_patient,
        patient::update_patient,
        patient::delete_patient,
        appointment::get_all_appointments,
        appointment::get_appointments,
        appointment::get_appointment,
        appointment::book_appointment,
        appointment::update_appointment,
        appointment::delete_appointment,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        LoginDto,
        TokenDto,
        Role,
        Sex,
        Species,
        Language,
        CustomerDto,
        CustomerSummaryDto,
        RegisterCustomerDto,
        UpdateCustomerDto,
        VeterinarianDto,
        VeterinarianSummaryDto,
        CreateVeterinarianDto,
        UpdateVeterinarianDto,
        PatientDto,
        PatientSummaryDto,
        PatientAppointmentDto,
        RegisterPatientDto,
        UpdatePatientDto,
        AppointmentDto,
        BookAppointmentDto,
        UpdateAppointmentDto,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = AUTH_TAG, description = "Registration, login and logout"),
        (name = CUSTOMER_TAG, description = "Customer accounts"),
        (name = VETERINARIAN_TAG, description = "Veterinarian accounts"),
        (name = PATIENT_TAG, description = "Patients owned by customers"),
        (name = APPOINTMENT_TAG, description = "Appointment booking"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by the protected paths.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/customers/register", post(register_customer))
        .route("/auth/customers/login", post(login_customer))
        .route("/auth/veterinarians/login", post(login_veterinarian))
        .route("/auth/logout", post(logout))
        .route("/customers", get(get_customers))
        .route(
            "/customers/{id}",
            get(get_customer)
                .put(update_customer)
                .patch(update_customer)
                .delete(delete_customer),
        )
        .route("/veterinarians", get(get_veterinarians))
        .route("/veterinarians/register", post(register_veterinarian))
        .route(
            "/veterinarians/{id}",
            get(get_veterinarian)
                .put(update_veterinarian)
                .patch(update_veterinarian)
                .delete(delete_veterinarian),
        )
        .route("/patients", get(get_patients))
        .route("/patients/register", post(register_patient))
        .route(
            "/patients/{id}",
            get(get_patient)
                .put(update_patient)
                .patch(update_patient)
                .delete(delete_patient),
        )
        .route("/appointments", get(get_appointments))
        .route("/appointments/admin", get(get_all_appointments))
        .route("/appointments/book", post(book_appointment))
        .route(
            "/appointments/{id}",
            put(update_appointment)
                .patch(update_appointment)
                .get(get_appointment)
                .delete(delete_appointment),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
