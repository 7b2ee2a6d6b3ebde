//! Round trips through generated bindings.
//!
//! `fixtures/bindings.rs` is the output of the generator for
//! `fixtures/service.json` and `fixtures/meta.json`. The core crate checks the
//! text stays in sync; these tests check that the text behaves.

#![allow(non_snake_case)]
#![allow(dead_code)]

#[path = "fixtures/bindings.rs"]
mod bindings;

use bindings::requests::{GetinfoRequest, ListfundsRequest};
use bindings::responses::{
    ChannelState, GetinfoResponse, ListfundsOutputs, ListfundsOutputsStatus, ListfundsResponse,
};
use bindings::{IntoRequest, Request, Response, TypedRequest};
use msgbind_runtime::{TryFromResponseError, UnknownDiscriminantError};
use proptest::prelude::*;
use serde_json::json;
use test_case::test_case;

fn getinfo_response() -> GetinfoResponse {
    GetinfoResponse {
        my_field: -7,
        alias: None,
        address: None,
        state: ChannelState::OPEN,
        blockheight: 800_000,
        id: "02abcdef".to_string(),
    }
}

// ============================================================================
// Struct members
// ============================================================================

#[test]
fn GetinfoResponse___renamed_member___uses_wire_name() {
    let value = serde_json::to_value(getinfo_response()).unwrap();

    assert_eq!(value["myField"], json!(-7));
    assert!(value.get("my_field").is_none());
}

#[test]
fn GetinfoResponse___absent_optionals___are_skipped() {
    let value = serde_json::to_value(getinfo_response()).unwrap();

    assert!(value.get("alias").is_none());
    assert!(value.get("address").is_none());
}

#[test]
fn GetinfoResponse___empty_optional_array___round_trips_as_absent() {
    let mut response = getinfo_response();
    response.address = Some(vec![]);

    let text = serde_json::to_string(&response).unwrap();
    let back: GetinfoResponse = serde_json::from_str(&text).unwrap();

    assert!(!text.contains("address"));
    assert_eq!(back.address, None);
}

#[test]
fn GetinfoResponse___decodes_wire_document() {
    let doc = json!({
        "id": "02abcdef",
        "blockheight": 42,
        "myField": 3,
        "alias": "node",
        "address": ["127.0.0.1"],
        "state": "CLOSED"
    });

    let response: GetinfoResponse = serde_json::from_value(doc).unwrap();

    assert_eq!(response.my_field, 3);
    assert_eq!(response.alias.as_deref(), Some("node"));
    assert_eq!(response.address, Some(vec!["127.0.0.1".to_string()]));
    assert_eq!(response.state, ChannelState::CLOSED);
}

#[test]
fn GetinfoResponse___missing_required_member___fails() {
    let doc = json!({ "id": "x", "myField": 1, "state": "OPEN" });

    let result = serde_json::from_value::<GetinfoResponse>(doc);

    assert!(result.is_err());
}

#[test]
fn ListfundsResponse___nested_composites___round_trip() {
    let response = ListfundsResponse {
        routes: Some(vec![vec!["a".to_string(), "b".to_string()], vec![]]),
        outputs: vec![ListfundsOutputs {
            status: ListfundsOutputsStatus::CONFIRMED,
            amount_msat: 1_000,
            txid: "ff".to_string(),
        }],
    };

    let value = serde_json::to_value(&response).unwrap();
    let back: ListfundsResponse = serde_json::from_value(value.clone()).unwrap();

    assert_eq!(value["outputs"][0]["status"], json!("confirmed"));
    assert_eq!(back.outputs[0].amount_msat, 1_000);
    assert_eq!(back.routes.map(|r| r.len()), Some(2));
}

// ============================================================================
// Enums
// ============================================================================

#[test_case(0, ChannelState::CLOSED)]
#[test_case(1, ChannelState::OPEN)]
fn ChannelState___try_from___mapped_code(code: i32, expected: ChannelState) {
    assert_eq!(ChannelState::try_from(code), Ok(expected));
    assert_eq!(i32::from(expected), code);
}

#[test_case(0, ListfundsOutputsStatus::UNCONFIRMED)]
#[test_case(1, ListfundsOutputsStatus::CONFIRMED)]
#[test_case(2, ListfundsOutputsStatus::SPENT)]
fn ListfundsOutputsStatus___try_from___positional_code(code: i32, expected: ListfundsOutputsStatus) {
    assert_eq!(ListfundsOutputsStatus::try_from(code), Ok(expected));
    assert_eq!(i32::from(expected), code);
}

#[test]
fn ChannelState___try_from___unknown_code___fails() {
    let err = ChannelState::try_from(9).unwrap_err();

    assert_eq!(err, UnknownDiscriminantError::new("ChannelState", 9));
}

#[test]
fn ListfundsOutputsStatus___display___is_normalized_name() {
    assert_eq!(ListfundsOutputsStatus::UNCONFIRMED.to_string(), "UNCONFIRMED");
}

#[test]
fn ListfundsOutputsStatus___serde___uses_raw_name() {
    let text = serde_json::to_string(&ListfundsOutputsStatus::SPENT).unwrap();

    assert_eq!(text, "\"spent\"");
}

// ============================================================================
// Unions and glue
// ============================================================================

#[test]
fn Request___serializes_method_and_params() {
    let request: Request = GetinfoRequest {}.into();

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value, json!({ "method": "getinfo", "params": {} }));
}

#[test]
fn Request___decodes_by_lowercase_tag() {
    let doc = json!({ "method": "listfunds", "params": { "spent": true } });

    let request: Request = serde_json::from_value(doc).unwrap();

    match request {
        Request::ListFunds(r) => assert_eq!(r.spent, Some(true)),
        other => panic!("unexpected request {}", other.method()),
    }
}

#[test]
fn Response___downcast___matching_method() {
    let response = Response::Getinfo(getinfo_response());

    let getinfo = GetinfoResponse::try_from(response).unwrap();

    assert_eq!(getinfo.blockheight, 800_000);
}

#[test]
fn Response___downcast___other_method___reports_both_tags() {
    let response = Response::ListFunds(ListfundsResponse {
        routes: None,
        outputs: vec![],
    });

    let err = GetinfoResponse::try_from(response).unwrap_err();

    assert_eq!(err, TryFromResponseError::new("getinfo", "listfunds"));
}

#[test]
fn TypedRequest___method___is_wire_tag() {
    assert_eq!(GetinfoRequest {}.method(), "getinfo");
    assert_eq!(ListfundsRequest { spent: None }.method(), "listfunds");
}

fn roundtrip<R>(request: R, response: Response) -> Result<R::Response, TryFromResponseError>
where
    R: IntoRequest,
{
    let request: Request = request.into();
    assert_eq!(request.method(), response.method());
    R::Response::try_from(response)
}

#[test]
fn IntoRequest___associated_response___downcasts() {
    let response = Response::Getinfo(getinfo_response());

    let getinfo = roundtrip(GetinfoRequest {}, response).unwrap();

    assert_eq!(getinfo.id, "02abcdef");
}

// ============================================================================
// Property tests
// ============================================================================

fn channel_state() -> impl Strategy<Value = ChannelState> {
    prop_oneof![Just(ChannelState::OPEN), Just(ChannelState::CLOSED)]
}

proptest! {
    #[test]
    fn GetinfoResponse___round_trips(
        my_field in any::<i64>(),
        alias in proptest::option::of("[a-z]{1,8}"),
        address in proptest::option::of(proptest::collection::vec("[0-9.]{1,15}", 1..4)),
        state in channel_state(),
        blockheight in any::<u32>(),
        id in "[0-9a-f]{2,66}",
    ) {
        let response = GetinfoResponse { my_field, alias, address, state, blockheight, id };

        let text = serde_json::to_string(&Response::Getinfo(response.clone())).unwrap();
        let back: Response = serde_json::from_str(&text).unwrap();
        let back = GetinfoResponse::try_from(back).unwrap();

        prop_assert_eq!(back.my_field, response.my_field);
        prop_assert_eq!(back.alias, response.alias);
        prop_assert_eq!(back.address, response.address);
        prop_assert_eq!(back.state, response.state);
        prop_assert_eq!(back.blockheight, response.blockheight);
        prop_assert_eq!(back.id, response.id);
    }

    #[test]
    fn unknown_codes___are_rejected(code in any::<i32>().prop_filter("mapped", |c| !(0..=2).contains(c))) {
        prop_assert!(ListfundsOutputsStatus::try_from(code).is_err());
    }
}
