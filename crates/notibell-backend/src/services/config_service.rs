use crate::client::BridgeClosed;

/// Handles an incoming configuration request (see
/// [`notibell_bridge::MessageToBackend::ConfigurationRequest`]).
pub async fn handle_config_request(context: super::AppContextHandle) -> Result<(), BridgeClosed> {
    let config = {
        let state = context.state.read().await;
        state.config.clone()
    };
    context
        .send(notibell_bridge::MessageFromBackend::ConfigurationResponse(
            config,
        ))
        .await
}
