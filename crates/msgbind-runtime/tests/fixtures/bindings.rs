use serde::{Deserialize, Serialize};
pub use msgbind_runtime::TryFromResponseError;

#[allow(non_camel_case_types)]
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "method", content = "params")]
#[serde(rename_all = "lowercase")]
pub enum Request {
    Getinfo(requests::GetinfoRequest),
    ListFunds(requests::ListfundsRequest),
}

impl Request {
    /// Wire tag of the active case.
    pub fn method(&self) -> &'static str {
        match *self {
            Request::Getinfo(_) => "getinfo",
            Request::ListFunds(_) => "listfunds",
        }
    }
}

#[allow(non_camel_case_types)]
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "method", content = "result")]
#[serde(rename_all = "lowercase")]
pub enum Response {
    Getinfo(responses::GetinfoResponse),
    ListFunds(responses::ListfundsResponse),
}

impl Response {
    /// Wire tag of the active case.
    pub fn method(&self) -> &'static str {
        match *self {
            Response::Getinfo(_) => "getinfo",
            Response::ListFunds(_) => "listfunds",
        }
    }
}

pub trait IntoRequest: Into<Request> {
    type Response: TryFrom<Response, Error = TryFromResponseError>;
}

pub trait TypedRequest {
    type Response;

    fn method(&self) -> &str;
}

pub mod requests {
    #[allow(unused_imports)]
    use serde::{Deserialize, Serialize};
    use super::{IntoRequest, Request, TypedRequest};

    #[derive(Clone, Debug, Deserialize, Serialize)]
    pub struct GetinfoRequest {
    }

    impl From<GetinfoRequest> for Request {
        fn from(r: GetinfoRequest) -> Self {
            Request::Getinfo(r)
        }
    }

    impl IntoRequest for GetinfoRequest {
        type Response = super::responses::GetinfoResponse;
    }

    impl TypedRequest for GetinfoRequest {
        type Response = super::responses::GetinfoResponse;

        fn method(&self) -> &str {
            "getinfo"
        }
    }

    #[derive(Clone, Debug, Deserialize, Serialize)]
    pub struct ListfundsRequest {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub spent: Option<bool>,
    }

    impl From<ListfundsRequest> for Request {
        fn from(r: ListfundsRequest) -> Self {
            Request::ListFunds(r)
        }
    }

    impl IntoRequest for ListfundsRequest {
        type Response = super::responses::ListfundsResponse;
    }

    impl TypedRequest for ListfundsRequest {
        type Response = super::responses::ListfundsResponse;

        fn method(&self) -> &str {
            "listfunds"
        }
    }

}

pub mod responses {
    #[allow(unused_imports)]
    use serde::{Deserialize, Serialize};
    use super::{Response, TryFromResponseError};

    #[allow(non_camel_case_types)]
    #[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
    pub enum ChannelState {
        CLOSED = 0,
        OPEN = 1,
    }

    impl TryFrom<i32> for ChannelState {
        type Error = msgbind_runtime::UnknownDiscriminantError;

        fn try_from(c: i32) -> Result<ChannelState, Self::Error> {
            match c {
                0 => Ok(ChannelState::CLOSED),
                1 => Ok(ChannelState::OPEN),
                o => Err(msgbind_runtime::UnknownDiscriminantError::new("ChannelState", o)),
            }
        }
    }

    impl From<ChannelState> for i32 {
        fn from(v: ChannelState) -> i32 {
            v as i32
        }
    }

    impl std::fmt::Display for ChannelState {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            let s: &str = match *self {
                ChannelState::CLOSED => "CLOSED",
                ChannelState::OPEN => "OPEN",
            };
            f.write_str(s)
        }
    }

    #[derive(Clone, Debug, Deserialize, Serialize)]
    pub struct GetinfoResponse {
        #[serde(rename = "myField")]
        pub my_field: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub alias: Option<String>,
        #[serde(skip_serializing_if = "msgbind_runtime::is_none_or_empty")]
        pub address: Option<Vec<String>>,
        // Path `Getinfo.state`
        pub state: ChannelState,
        pub blockheight: u32,
        pub id: String,
    }

    impl TryFrom<Response> for GetinfoResponse {
        type Error = TryFromResponseError;

        fn try_from(response: Response) -> Result<Self, Self::Error> {
            match response {
                Response::Getinfo(response) => Ok(response),
                #[allow(unreachable_patterns)]
                other => Err(TryFromResponseError::new("getinfo", other.method())),
            }
        }
    }

    #[allow(non_camel_case_types)]
    #[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
    pub enum ListfundsOutputsStatus {
        #[serde(rename = "unconfirmed")]
        UNCONFIRMED = 0,
        #[serde(rename = "confirmed")]
        CONFIRMED = 1,
        #[serde(rename = "spent")]
        SPENT = 2,
    }

    impl TryFrom<i32> for ListfundsOutputsStatus {
        type Error = msgbind_runtime::UnknownDiscriminantError;

        fn try_from(c: i32) -> Result<ListfundsOutputsStatus, Self::Error> {
            match c {
                0 => Ok(ListfundsOutputsStatus::UNCONFIRMED),
                1 => Ok(ListfundsOutputsStatus::CONFIRMED),
                2 => Ok(ListfundsOutputsStatus::SPENT),
                o => Err(msgbind_runtime::UnknownDiscriminantError::new("ListfundsOutputsStatus", o)),
            }
        }
    }

    impl From<ListfundsOutputsStatus> for i32 {
        fn from(v: ListfundsOutputsStatus) -> i32 {
            v as i32
        }
    }

    impl std::fmt::Display for ListfundsOutputsStatus {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            let s: &str = match *self {
                ListfundsOutputsStatus::UNCONFIRMED => "UNCONFIRMED",
                ListfundsOutputsStatus::CONFIRMED => "CONFIRMED",
                ListfundsOutputsStatus::SPENT => "SPENT",
            };
            f.write_str(s)
        }
    }

    #[derive(Clone, Debug, Deserialize, Serialize)]
    pub struct ListfundsOutputs {
        // Path `ListFunds.outputs[].status`
        pub status: ListfundsOutputsStatus,
        pub amount_msat: u64,
        pub txid: String,
    }

    #[derive(Clone, Debug, Deserialize, Serialize)]
    pub struct ListfundsResponse {
        #[serde(skip_serializing_if = "msgbind_runtime::is_none_or_empty")]
        pub routes: Option<Vec<Vec<String>>>,
        pub outputs: Vec<ListfundsOutputs>,
    }

    impl TryFrom<Response> for ListfundsResponse {
        type Error = TryFromResponseError;

        fn try_from(response: Response) -> Result<Self, Self::Error> {
            match response {
                Response::ListFunds(response) => Ok(response),
                #[allow(unreachable_patterns)]
                other => Err(TryFromResponseError::new("listfunds", other.method())),
            }
        }
    }

}
