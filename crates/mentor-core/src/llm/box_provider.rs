//! BoxGenerativeModel -- object-safe dynamic dispatch wrapper for GenerativeModel.
//!
//! 1. Define an object-safe `GenerativeModelDyn` trait with boxed futures
//! 2. Blanket-impl `GenerativeModelDyn` for all `T: GenerativeModel`
//! 3. `BoxGenerativeModel` wraps `Box<dyn GenerativeModelDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use mentor_types::llm::LlmError;
use mentor_types::turn::{Content, Turn};

use super::provider::GenerativeModel;

/// Object-safe version of [`GenerativeModel`] with boxed futures.
pub trait GenerativeModelDyn: Send + Sync {
    fn name(&self) -> &str;

    fn generate_boxed<'a>(
        &'a self,
        contents: &'a [Content],
    ) -> Pin<Box<dyn Future<Output = Result<Turn, LlmError>> + Send + 'a>>;
}

impl<T: GenerativeModel> GenerativeModelDyn for T {
    fn name(&self) -> &str {
        GenerativeModel::name(self)
    }

    fn generate_boxed<'a>(
        &'a self,
        contents: &'a [Content],
    ) -> Pin<Box<dyn Future<Output = Result<Turn, LlmError>> + Send + 'a>> {
        Box::pin(self.generate(contents))
    }
}

/// Type-erased generative model.
///
/// `GenerativeModel` uses RPITIT and cannot be a trait object directly, so
/// the application state holds this wrapper instead.
pub struct BoxGenerativeModel {
    inner: Box<dyn GenerativeModelDyn + Send + Sync>,
}

impl BoxGenerativeModel {
    pub fn new<T: GenerativeModel + 'static>(model: T) -> Self {
        Self {
            inner: Box::new(model),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn generate(&self, contents: &[Content]) -> Result<Turn, LlmError> {
        self.inner.generate_boxed(contents).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LastTurnEcho;

    impl GenerativeModel for LastTurnEcho {
        fn name(&self) -> &str {
            "echo"
        }

        async fn generate(&self, contents: &[Content]) -> Result<Turn, LlmError> {
            match contents.last() {
                Some(Content::Turn(turn)) => Ok(Turn::model(turn.joined_text())),
                _ => Err(LlmError::EmptyResponse),
            }
        }
    }

    #[tokio::test]
    async fn test_boxed_model_delegates() {
        let model = BoxGenerativeModel::new(LastTurnEcho);
        assert_eq!(model.name(), "echo");

        let reply = model.generate(&[Turn::user("ping").into()]).await.unwrap();
        assert_eq!(reply, Turn::model("ping"));
    }

    #[tokio::test]
    async fn test_boxed_model_propagates_errors() {
        let model = BoxGenerativeModel::new(LastTurnEcho);
        let err = model.generate(&[]).await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyResponse));
    }
}
