use serde::Serialize;
use serde_json::Value;
use tracing::info;

use shopdesk_domain::auth::{LoginRequest, RegisterRequest};

use crate::presentation::cli::{Command, CrudAction, DriveUrlArgs};
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;

pub type CommandResult = Result<Value, CommandError>;

/// Run one CLI command and return what should be printed.
pub async fn execute(command: Command, state: &AppState) -> CommandResult {
    if command.requires_session() && !state.is_authenticated() {
        return Err(CommandError::unauthorized(
            "Not logged in. Run `shopdesk login` first.",
        ));
    }

    match command {
        Command::Login { username, password } => {
            let session = state
                .services
                .auth
                .login(LoginRequest { username, password })
                .await?;
            to_json(&serde_json::json!({ "username": session.username }))
        }
        Command::Register {
            username,
            email,
            password,
            full_name,
        } => {
            let response = state
                .services
                .auth
                .register(RegisterRequest {
                    username,
                    email,
                    password,
                    full_name,
                })
                .await?;
            to_json(&response.user)
        }
        Command::Logout => {
            state.services.auth.logout()?;
            Ok(serde_json::json!({ "loggedOut": true }))
        }
        Command::Whoami => Ok(serde_json::json!({
            "authenticated": state.is_authenticated(),
            "username": state.services.auth.username(),
        })),
        Command::Dashboard => to_json(&state.services.dashboard.get_dashboard_stats().await),
        Command::Categories { action } => categories(action, state).await,
        Command::Subcategories { action } => subcategories(action, state).await,
        Command::Products { action } => products(action, state).await,
        Command::Providers { action } => providers(action, state).await,
        Command::Orders => to_json(&state.services.orders.list_orders().await?),
        Command::DriveUrl(args) => drive_url(args, state).await,
    }
}

impl Command {
    fn requires_session(&self) -> bool {
        !matches!(
            self,
            Command::Login { .. }
                | Command::Register { .. }
                | Command::Logout
                | Command::Whoami
                | Command::DriveUrl(_)
        )
    }
}

async fn categories(action: CrudAction, state: &AppState) -> CommandResult {
    let catalog = &state.services.catalog;
    match action {
        CrudAction::List => to_json(&catalog.list_categories().await?),
        CrudAction::Get { id } => to_json(&catalog.get_category(id).await?),
        CrudAction::Create { json } => {
            to_json(&catalog.create_category(serde_json::from_str(&json)?).await?)
        }
        CrudAction::Update { json } => {
            to_json(&catalog.update_category(serde_json::from_str(&json)?).await?)
        }
        CrudAction::Delete { id } => {
            catalog.delete_category(id).await?;
            deleted(id)
        }
    }
}

async fn subcategories(action: CrudAction, state: &AppState) -> CommandResult {
    let catalog = &state.services.catalog;
    match action {
        CrudAction::List => to_json(&catalog.list_subcategories().await?),
        CrudAction::Get { id } => to_json(&catalog.get_subcategory(id).await?),
        CrudAction::Create { json } => {
            to_json(&catalog.create_subcategory(serde_json::from_str(&json)?).await?)
        }
        CrudAction::Update { json } => {
            to_json(&catalog.update_subcategory(serde_json::from_str(&json)?).await?)
        }
        CrudAction::Delete { id } => {
            catalog.delete_subcategory(id).await?;
            deleted(id)
        }
    }
}

async fn products(action: CrudAction, state: &AppState) -> CommandResult {
    let catalog = &state.services.catalog;
    match action {
        CrudAction::List => to_json(&catalog.product_rows().await?),
        CrudAction::Get { id } => to_json(&catalog.get_product(id).await?),
        CrudAction::Create { json } => {
            to_json(&catalog.create_product(serde_json::from_str(&json)?).await?)
        }
        CrudAction::Update { json } => {
            to_json(&catalog.update_product(serde_json::from_str(&json)?).await?)
        }
        CrudAction::Delete { id } => {
            let message = catalog.delete_product(id).await?;
            Ok(serde_json::json!({ "deleted": id, "message": message }))
        }
    }
}

async fn providers(action: CrudAction, state: &AppState) -> CommandResult {
    let catalog = &state.services.catalog;
    match action {
        CrudAction::List => to_json(&catalog.list_providers().await?),
        CrudAction::Get { id } => to_json(&catalog.get_provider(id).await?),
        CrudAction::Create { json } => {
            to_json(&catalog.create_provider(serde_json::from_str(&json)?).await?)
        }
        CrudAction::Update { json } => {
            to_json(&catalog.update_provider(serde_json::from_str(&json)?).await?)
        }
        CrudAction::Delete { id } => {
            catalog.delete_provider(id).await?;
            deleted(id)
        }
    }
}

async fn drive_url(args: DriveUrlArgs, state: &AppState) -> CommandResult {
    let images = &state.services.images;
    let url = if args.probe {
        images.get_working_image_url(&args.url).await
    } else {
        images.direct_url(&args.url)
    };
    info!(input = %args.url, %url, probed = args.probe, "Drive URL resolved");
    Ok(serde_json::json!({ "url": url }))
}

fn deleted(id: shopdesk_domain::EntityId) -> CommandResult {
    Ok(serde_json::json!({ "deleted": id }))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> CommandResult {
    serde_json::to_value(value).map_err(|e| CommandError::infrastructure(e.to_string()))
}
