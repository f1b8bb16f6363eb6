use crate::client::BridgeClosed;

/// Handles an incoming connection state request (see
/// [`notibell_bridge::MessageToBackend::ConnectionStateRequest`]).
pub async fn handle_connection_state_request(
    context: super::AppContextHandle,
) -> Result<(), BridgeClosed> {
    let connection_state = {
        let state = context.state.read().await;
        *state.connection.borrow()
    };
    context
        .send(notibell_bridge::MessageFromBackend::ConnectionStateChanged(
            connection_state,
        ))
        .await
}
