//! Client handles for the actor services.
//!
//! Each client wraps the sending half of a service's request channel and
//! exposes its operations as async methods. The oneshot boilerplate is
//! generated by [`client_method!`].

mod catalog_client;
mod order_client;
mod store_client;

pub use catalog_client::CatalogClient;
pub use order_client::OrderClient;
pub use store_client::OrderStoreClient;

/// Generate client methods with oneshot channel boilerplate and automatic
/// tracing. A closed or dropped channel maps to the error type's
/// `ActorCommunicationError` variant.
#[macro_export]
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender.send($crate::messages::$request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}
