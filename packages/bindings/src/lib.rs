use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Payoff projection
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_payoff(input_json: String) -> NapiResult<String> {
    let input: payplan_core::payoff::simulator::PayoffInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        payplan_core::payoff::simulator::calculate_payoff(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Strategy comparison
// ---------------------------------------------------------------------------

#[napi]
pub fn compare_strategies(input_json: String) -> NapiResult<String> {
    let input: payplan_core::payoff::comparison::ComparisonInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        payplan_core::payoff::comparison::compare_strategies(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Extra-payment sensitivity
// ---------------------------------------------------------------------------

#[napi]
pub fn extra_payment_sensitivity(input_json: String) -> NapiResult<String> {
    let input: payplan_core::payoff::sensitivity::SensitivityInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        payplan_core::payoff::sensitivity::sweep_extra_payment(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
