// [libs/infra/remote-api/src/lib.rs]
/*!
 * =================================================================
 * APARATO: REMOTE API (ESTRATO L3 - INFRA)
 * RESPONSABILIDAD: ÚNICO PUNTO DE CONTACTO CON EL SERVICIO DE REPUTACIÓN
 * =================================================================
 */

mod client;
mod errors;
mod fixture;
pub mod wire;

pub use client::{HttpSafeBrowsingApi, SafeBrowsingApi};
pub use errors::RemoteError;
pub use fixture::FixtureSafeBrowsingApi;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{HashListEntry, ListHashListsResponse, RiceDeltaEncoded32Bit};

    fn sample_envelope() -> ListHashListsResponse {
        ListHashListsResponse {
            lists: vec![
                HashListEntry {
                    name: "se".to_string(),
                    description: Some("social engineering".to_string()),
                    compressed_removals: Some(RiceDeltaEncoded32Bit {
                        first_value: 1,
                        rice_parameter: 2,
                        entries_count: 0,
                        encoded_data: Vec::new(),
                    }),
                    additions_thirty_two_bytes: None,
                    version: None,
                    sha256_checksum: None,
                },
                HashListEntry {
                    name: "mw".to_string(),
                    description: None,
                    compressed_removals: None,
                    additions_thirty_two_bytes: None,
                    version: None,
                    sha256_checksum: None,
                },
            ],
        }
    }

    #[tokio::test]
    async fn fixture_batch_get_aligns_with_requested_names() {
        let api = FixtureSafeBrowsingApi::from_envelope(sample_envelope());
        let result = api
            .batch_get(&["mw".to_string(), "se".to_string(), "unknown".to_string()])
            .await
            .unwrap();

        let names: Vec<&str> = result.lists.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["mw", "se"]);
    }

    #[tokio::test]
    async fn fixture_list_hash_lists_returns_everything() {
        let api = FixtureSafeBrowsingApi::from_envelope(sample_envelope());
        let result = api.list_hash_lists().await.unwrap();
        assert_eq!(result.lists.len(), 2);
    }

    #[test]
    fn wire_roundtrips_through_json_with_base64_payload() {
        let envelope = sample_envelope();
        let json = serde_json::to_string(&envelope).unwrap();
        let back: ListHashListsResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back.lists[0].name, "se");
        assert_eq!(back.lists[0].compressed_removals.as_ref().unwrap().first_value, 1);
    }
}
