//! Test helpers for inbound HTTP handlers.
//!
//! Handlers run against the real domain services with mocked driven ports so
//! call-count expectations prove whether a collaborator was reached.

use std::sync::Arc;

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::{App, test, web};

use crate::domain::ports::{
    MockIdentityGateway, MockIdentityProviderClient, MockProvisioningTrigger,
    MockTenantAdministrator, MockTenantDirectory,
};
use crate::domain::{IdentityGatewayService, TenantAdministrationService};
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;

/// State whose identity flows hit `client`; tenant calls are unexpected.
pub(crate) fn identity_state(client: MockIdentityProviderClient) -> HttpState {
    HttpState::new(
        Arc::new(MockTenantAdministrator::new()),
        Arc::new(IdentityGatewayService::new(Arc::new(client))),
    )
}

/// State whose tenant flows hit `directory` and `provisioner`.
pub(crate) fn tenant_state(
    directory: MockTenantDirectory,
    provisioner: MockProvisioningTrigger,
) -> HttpState {
    HttpState::new(
        Arc::new(TenantAdministrationService::new(
            Arc::new(directory),
            Arc::new(provisioner),
        )),
        Arc::new(MockIdentityGateway::new()),
    )
}

/// Send `request` through an app configured with `state`.
pub(crate) async fn send(state: HttpState, request: test::TestRequest) -> ServiceResponse<BoxBody> {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;
    test::call_service(&app, request.to_request()).await
}
