use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use forma_domain as domain;

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Clone)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

#[derive(Clone)]
pub struct REST<S: SendRequest> {
    pub sender: S,
    pub base_url: String,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            sender: GlooNetSendRequest,
            base_url: base_url.to_string(),
        }
    }
}

impl<S: SendRequest> REST<S> {
    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }

    async fn fetch<T>(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<T, domain::ReadError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request =
            request.map_err(|err| domain::StorageError::Other(err.to_string().into()))?;
        match self.sender.send_request(request).await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<T>().await {
                        Ok(data) => Ok(data),
                        Err(err) => {
                            Err(domain::StorageError::Deserialization(err.to_string()).into())
                        }
                    }
                } else {
                    Err(
                        domain::StorageError::Status(response.status(), response.status_text())
                            .into(),
                    )
                }
            }
            Err(_) => Err(domain::StorageError::NoConnection.into()),
        }
    }
}

impl<S: SendRequest> domain::EquipmentRepository for REST<S> {
    async fn search_equipments(
        &self,
        name: &str,
    ) -> Result<Vec<domain::Equipment>, domain::ReadError> {
        let response: Equipments = self
            .fetch(
                Request::get(&self.url("equipments"))
                    .query([("name", name)])
                    .build(),
            )
            .await?;
        Ok(response
            .equipments
            .into_iter()
            .map(domain::Equipment::from)
            .collect())
    }
}

impl<S: SendRequest> domain::ExerciseRepository for REST<S> {
    async fn search_exercises(
        &self,
        query: &domain::ExerciseQuery,
    ) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        let response: Vec<Value> = self
            .fetch(
                Request::get(&self.url("exercises"))
                    .query([
                        ("bodyPart", query.body_part.as_ref().as_str()),
                        ("limit", query.limit.as_str()),
                        ("equipments", query.equipments.as_str()),
                    ])
                    .build(),
            )
            .await?;
        Ok(response.into_iter().map(domain::Exercise::from).collect())
    }
}

#[derive(Serialize, Deserialize)]
pub struct Equipments {
    pub equipments: Vec<Equipment>,
}

#[derive(Serialize, Deserialize)]
pub struct Equipment {
    pub name: String,
    pub image: String,
}

impl From<Equipment> for domain::Equipment {
    fn from(value: Equipment) -> Self {
        domain::Equipment {
            name: value.name,
            image: value.image,
        }
    }
}

impl From<domain::Equipment> for Equipment {
    fn from(value: domain::Equipment) -> Self {
        Equipment {
            name: value.name,
            image: value.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", "/equipments")]
    #[case("https://api.example.org", "https://api.example.org/equipments")]
    #[case("https://api.example.org/", "https://api.example.org/equipments")]
    #[case("https://example.org/api/v1", "https://example.org/api/v1/equipments")]
    fn test_url(#[case] base_url: &str, #[case] expected: &str) {
        assert_eq!(REST::new(base_url).url("equipments"), expected);
    }

    #[test]
    fn test_equipment_from_wire() {
        let equipment: Equipments = serde_json::from_str(
            r#"{"equipments": [{"name": "Dumbbell", "image": "https://example.org/d.png"}]}"#,
        )
        .unwrap();

        assert_eq!(
            equipment
                .equipments
                .into_iter()
                .map(domain::Equipment::from)
                .collect::<Vec<_>>(),
            vec![domain::Equipment {
                name: "Dumbbell".to_string(),
                image: "https://example.org/d.png".to_string(),
            }]
        );
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    mod wasm {
        use std::cell::RefCell;

        use pretty_assertions::assert_eq;
        use serde_json::json;
        use wasm_bindgen_test::wasm_bindgen_test;

        use forma_domain::{EquipmentRepository, ExerciseRepository};

        use crate::tests::data::{BARBELL, DUMBBELL, EXERCISES, QUERY};

        use super::*;

        #[wasm_bindgen_test]
        async fn test_search_equipments() {
            let rest = rest_with_response(Some(
                gloo_net::http::Response::builder()
                    .status(200)
                    .json(&Equipments {
                        equipments: vec![
                            Equipment::from(DUMBBELL.clone()),
                            Equipment::from(BARBELL.clone()),
                        ],
                    }),
            ));

            assert_eq!(
                rest.search_equipments("bell").await.unwrap(),
                vec![DUMBBELL.clone(), BARBELL.clone()]
            );
            assert!(rest.sender.url().ends_with("/equipments?name=bell"));
        }

        #[wasm_bindgen_test]
        async fn test_search_equipments_no_connection() {
            assert!(matches!(
                rest_with_response(None).search_equipments("bell").await,
                Err(domain::ReadError::Storage(
                    domain::StorageError::NoConnection
                ))
            ));
        }

        #[wasm_bindgen_test]
        async fn test_search_equipments_invalid_response() {
            let rest = rest_with_response(Some(
                gloo_net::http::Response::builder()
                    .status(200)
                    .json(&json!([{ "name": "Dumbbell", "image": "d.png" }])),
            ));

            assert!(matches!(
                rest.search_equipments("bell").await,
                Err(domain::ReadError::Storage(
                    domain::StorageError::Deserialization(_)
                ))
            ));
        }

        #[wasm_bindgen_test]
        async fn test_search_exercises() {
            let rest = rest_with_response(Some(
                gloo_net::http::Response::builder()
                    .status(200)
                    .json(&EXERCISES
                        .iter()
                        .cloned()
                        .map(Value::from)
                        .collect::<Vec<_>>()),
            ));

            assert_eq!(
                rest.search_exercises(&QUERY).await.unwrap(),
                EXERCISES.to_vec()
            );
            assert!(
                rest.sender
                    .url()
                    .ends_with("/exercises?bodyPart=chest&limit=3&equipments=dumbbell%2Cbarbell")
            );
        }

        #[wasm_bindgen_test]
        async fn test_search_exercises_empty() {
            let rest = rest_with_response(Some(
                gloo_net::http::Response::builder()
                    .status(200)
                    .json(&json!([])),
            ));

            assert!(rest.search_exercises(&QUERY).await.unwrap().is_empty());
        }

        #[wasm_bindgen_test]
        async fn test_search_exercises_status() {
            let rest = rest_with_response(Some(
                gloo_net::http::Response::builder()
                    .status(500)
                    .status_text("Internal Server Error")
                    .body::<Option<&str>>(None),
            ));

            assert!(matches!(
                rest.search_exercises(&QUERY).await,
                Err(domain::ReadError::Storage(
                    domain::StorageError::Status(500, _)
                ))
            ));
        }

        #[wasm_bindgen_test]
        async fn test_search_exercises_no_connection() {
            assert!(matches!(
                rest_with_response(None).search_exercises(&QUERY).await,
                Err(domain::ReadError::Storage(
                    domain::StorageError::NoConnection
                ))
            ));
        }

        fn rest_with_response(
            response: Option<Result<gloo_net::http::Response, gloo_net::Error>>,
        ) -> REST<MockSendRequest> {
            REST {
                sender: MockSendRequest {
                    request: RefCell::new(None),
                    response: RefCell::new(response),
                },
                base_url: "http://localhost:8080".to_string(),
            }
        }

        struct MockSendRequest {
            request: RefCell<Option<gloo_net::http::Request>>,
            response: RefCell<Option<Result<gloo_net::http::Response, gloo_net::Error>>>,
        }

        impl MockSendRequest {
            fn url(&self) -> String {
                self.request
                    .borrow()
                    .as_ref()
                    .map(gloo_net::http::Request::url)
                    .unwrap_or_default()
            }
        }

        impl SendRequest for MockSendRequest {
            async fn send_request(
                &self,
                request: gloo_net::http::Request,
            ) -> Result<gloo_net::http::Response, gloo_net::Error> {
                *self.request.borrow_mut() = Some(request);
                (*self.response.borrow_mut())
                    .take()
                    .unwrap_or(Err(gloo_net::Error::GlooError("no response".to_string())))
            }
        }
    }
}
