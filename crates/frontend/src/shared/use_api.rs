use crate::shared::api_utils::{get_json, API_BASE, API_KEY};
use contracts::shared::api_request::ApiRequest;
use contracts::shared::endpoint::Endpoint;
use contracts::shared::fetch_state::{FetchError, FetchState, SettlePolicy};
use contracts::shared::query_params::QueryParams;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use std::future::Future;

/// Request helper bound to one endpoint.
///
/// Holds the last payload, the in-flight flag and the last error as
/// reactive state. Failures never leave [`UseApi::fetch_data`]; they show up
/// in [`UseApi::error`] only.
pub struct UseApi<T: Send + Sync + 'static> {
    endpoint: StoredValue<Endpoint>,
    state: RwSignal<FetchState<T>>,
}

impl<T: Send + Sync + 'static> Clone for UseApi<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for UseApi<T> {}

/// `UseApi` for `endpoint` that keeps every settlement (last to settle wins).
pub fn use_api<T>(endpoint: Endpoint) -> UseApi<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    UseApi::with_policy(endpoint, SettlePolicy::LastSettled)
}

impl<T> UseApi<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn with_policy(endpoint: Endpoint, policy: SettlePolicy) -> Self {
        Self {
            endpoint: StoredValue::new(endpoint),
            state: RwSignal::new(FetchState::new(policy)),
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint.get_value()
    }

    pub fn data(&self) -> Signal<Option<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.data.clone()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loading))
    }

    pub fn error(&self) -> Signal<Option<FetchError>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }

    /// GET `{API_BASE}/{endpoint}` with `params` plus the `key` credential.
    ///
    /// `loading` is on for the duration of the request and cleared once the
    /// outcome is applied, on both the success and the failure path.
    pub async fn fetch_data(&self, params: QueryParams) {
        self.fetch_with(params, |url| async move { get_json::<T>(&url).await })
            .await
    }

    /// [`UseApi::fetch_data`] with the HTTP call supplied by the caller.
    /// `transport` receives the full request URL.
    pub async fn fetch_with<F, Fut>(&self, params: QueryParams, transport: F)
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        // Owner gone (page unmounted): nothing to update.
        let Some(endpoint) = self.endpoint.try_get_value() else {
            return;
        };
        let Some(ticket) = self.state.try_update(|s| s.begin()) else {
            return;
        };

        let request = ApiRequest::new(API_BASE, endpoint, params, API_KEY);
        let result = transport(request.url()).await;

        self.state.try_update(|s| s.settle(ticket, result));
    }

    pub async fn fetch_data_default(&self) {
        self.fetch_data(QueryParams::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::task::noop_waker;
    use leptos::reactive::owner::Owner;
    use std::pin::pin;
    use std::task::{Context, Poll};

    fn snapshot(api: &UseApi<String>) -> (Option<String>, bool, Option<FetchError>) {
        api.state
            .with_untracked(|s| (s.data.clone(), s.loading, s.error.clone()))
    }

    #[test]
    fn test_fetch_sends_params_and_credential() {
        Owner::new().with(|| {
            let api = use_api::<String>(Endpoint::ORDERS);
            let params = QueryParams::new()
                .with("dateFrom", "2024-01-01")
                .with("key", "from-caller");

            let mut seen = None;
            block_on(api.fetch_with(params, |url| {
                assert!(api.state.with_untracked(|s| s.loading));
                seen = Some(url);
                async { Ok("rows".to_string()) }
            }));

            let url = seen.unwrap();
            assert_eq!(
                url,
                format!(
                    "/api/orders?dateFrom=2024-01-01&key={}",
                    urlencoding::encode(API_KEY)
                )
            );
            assert!(!url.contains("from-caller"));
            assert_eq!(snapshot(&api), (Some("rows".to_string()), false, None));
        });
    }

    #[test]
    fn test_failure_keeps_data_and_retry_clears_error() {
        Owner::new().with(|| {
            let api = use_api::<String>(Endpoint::SALES);
            block_on(api.fetch_with(QueryParams::new(), |_| async {
                Ok("first".to_string())
            }));

            let failure = FetchError::Status {
                status: 500,
                status_text: "Internal Server Error".to_string(),
            };
            block_on(api.fetch_with(QueryParams::new(), |_| {
                let failure = failure.clone();
                async move { Err(failure) }
            }));
            assert_eq!(
                snapshot(&api),
                (Some("first".to_string()), false, Some(failure))
            );

            block_on(api.fetch_with(QueryParams::new(), |_| {
                assert_eq!(api.state.with_untracked(|s| s.error.clone()), None);
                async { Ok("second".to_string()) }
            }));
            assert_eq!(snapshot(&api), (Some("second".to_string()), false, None));
        });
    }

    #[test]
    fn test_latest_only_ignores_stale_settlement() {
        Owner::new().with(|| {
            let api = UseApi::<String>::with_policy(Endpoint::ORDERS, SettlePolicy::LatestOnly);
            let (first_tx, first_rx) = oneshot::channel::<String>();
            let (second_tx, second_rx) = oneshot::channel::<String>();

            let mut first = pin!(api.fetch_with(QueryParams::new(), |_| async move {
                first_rx.await.map_err(|e| FetchError::Transport(e.to_string()))
            }));
            let mut second = pin!(api.fetch_with(QueryParams::new(), |_| async move {
                second_rx.await.map_err(|e| FetchError::Transport(e.to_string()))
            }));

            let waker = noop_waker();
            let mut cx = Context::from_waker(&waker);
            assert!(first.as_mut().poll(&mut cx).is_pending());
            assert!(second.as_mut().poll(&mut cx).is_pending());

            first_tx.send("stale".to_string()).unwrap();
            assert_eq!(first.as_mut().poll(&mut cx), Poll::Ready(()));
            assert_eq!(snapshot(&api), (None, true, None));

            second_tx.send("fresh".to_string()).unwrap();
            assert_eq!(second.as_mut().poll(&mut cx), Poll::Ready(()));
            assert_eq!(snapshot(&api), (Some("fresh".to_string()), false, None));
        });
    }
}
