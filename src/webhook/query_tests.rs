//! Tests for query string construction.

use super::query::{append_query, build_query};
use crate::model::QueryParams;

mod build {
    use super::*;

    #[test]
    fn absent_params_only_wait() {
        assert_eq!(build_query(None), "wait=true");
    }

    #[test]
    fn empty_thread_id_is_omitted() {
        assert_eq!(build_query(Some(&QueryParams::default())), "wait=true");
    }

    #[test]
    fn thread_id_is_included_when_set() {
        let query = build_query(Some(&QueryParams::thread("1234567890")));

        assert_eq!(query, "thread_id=1234567890&wait=true");
    }

    #[test]
    fn thread_id_is_form_encoded() {
        let query = build_query(Some(&QueryParams::thread("a b&c")));

        assert_eq!(query, "thread_id=a+b%26c&wait=true");
    }

    #[test]
    fn wait_is_always_true() {
        for params in [None, Some(QueryParams::default()), Some(QueryParams::thread("1"))] {
            let query = build_query(params.as_ref());
            assert!(query.split('&').any(|pair| pair == "wait=true"));
        }
    }
}

mod append {
    use super::*;

    #[test]
    fn sets_query_on_bare_url() {
        let mut url = url::Url::parse("https://discord.com/api/webhooks/1/tok").unwrap();

        append_query(&mut url, "wait=true");

        assert_eq!(url.as_str(), "https://discord.com/api/webhooks/1/tok?wait=true");
    }

    #[test]
    fn keeps_existing_query() {
        let mut url = url::Url::parse("https://discord.com/api/webhooks/1/tok?with_components=true")
            .unwrap();

        append_query(&mut url, "wait=true");

        assert_eq!(url.query(), Some("with_components=true&wait=true"));
    }
}
