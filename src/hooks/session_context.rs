// ============================================================================
// SESSION CONTEXT - Compartir la sesión de prueba virtual entre componentes
// ============================================================================
// Usa Context API de Yew en lugar de leer sessionStorage en cada componente
// ============================================================================

use yew::prelude::*;
use crate::hooks::use_try_on_session::{use_try_on_session, UseTryOnSessionHandle};

#[derive(Properties, PartialEq)]
pub struct TryOnSessionProviderProps {
    pub children: Children,
}

/// Provider que envuelve la página y crea el store una sola vez
#[function_component(TryOnSessionProvider)]
pub fn try_on_session_provider(props: &TryOnSessionProviderProps) -> Html {
    let session_handle = use_try_on_session();

    html! {
        <ContextProvider<UseTryOnSessionHandle> context={session_handle}>
            {props.children.clone()}
        </ContextProvider<UseTryOnSessionHandle>>
    }
}

/// Handle del provider más cercano. Todo componente que lo use debe estar
/// dentro de <TryOnSessionProvider>.
#[hook]
pub fn use_session_context() -> UseTryOnSessionHandle {
    use_context::<UseTryOnSessionHandle>()
        .expect("use_session_context requiere <TryOnSessionProvider> como ancestro")
}
