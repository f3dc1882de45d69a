//! Function-call encoding and return-data decoding.
//!
//! Calldata layout: `selector(4 bytes) ++ abi_encode_params(args...)`.
//! Return data is the ABI-encoded parameter sequence of the function outputs.

use alloy_core::dyn_abi::{DynSolType, DynSolValue};
use alloy_dyn_abi::Specifier;
use alloy_json_abi::{Function, JsonAbi, Param};

use crate::error::AbiError;
use crate::value::{normalize, to_dyn_value, AbiValue};

/// Parse a standard Ethereum ABI JSON document.
pub fn parse_abi(abi_json: &str) -> Result<JsonAbi, AbiError> {
    serde_json::from_str(abi_json).map_err(|e| AbiError::InvalidAbi {
        reason: e.to_string(),
    })
}

/// Look up a function by name. Overloads resolve to the first declaration.
pub fn find_function<'a>(abi: &'a JsonAbi, name: &str) -> Result<&'a Function, AbiError> {
    abi.functions()
        .find(|f| f.name == name)
        .ok_or_else(|| AbiError::MissingItem {
            kind: "function",
            name: name.to_string(),
        })
}

fn resolve_params(params: &[Param]) -> Result<Vec<DynSolType>, AbiError> {
    params
        .iter()
        .enumerate()
        .map(|(i, p)| {
            p.resolve()
                .map_err(|e| AbiError::InvalidAbi {
                    reason: format!("param {i} ('{}'): {e}", p.name),
                })
        })
        .collect()
}

/// Encode a function call to calldata bytes.
pub fn encode_call(
    abi: &JsonAbi,
    function_name: &str,
    args: &[AbiValue],
) -> Result<Vec<u8>, AbiError> {
    let func = find_function(abi, function_name)?;

    if args.len() != func.inputs.len() {
        return Err(AbiError::encode(format!(
            "argument count mismatch for '{function_name}': ABI has {}, got {}",
            func.inputs.len(),
            args.len()
        )));
    }

    let types = resolve_params(&func.inputs)?;
    let mut dyn_values = Vec::with_capacity(args.len());
    for ((param, ty), arg) in func.inputs.iter().zip(types.iter()).zip(args.iter()) {
        let dyn_val = to_dyn_value(arg, ty)
            .map_err(|e| AbiError::encode(format!("param '{}': {e}", param.name)))?;
        dyn_values.push(dyn_val);
    }

    let mut calldata = func.selector().to_vec();
    calldata.extend_from_slice(&DynSolValue::Tuple(dyn_values).abi_encode_params());
    Ok(calldata)
}

/// Decode `eth_call` return data against the function's declared outputs.
pub fn decode_outputs(
    abi: &JsonAbi,
    function_name: &str,
    data: &[u8],
) -> Result<Vec<AbiValue>, AbiError> {
    let func = find_function(abi, function_name)?;
    let types = resolve_params(&func.outputs)?;
    if types.is_empty() {
        return Ok(vec![]);
    }

    let decoded = DynSolType::Tuple(types)
        .abi_decode_params(data)
        .map_err(|e| AbiError::decode(format!("'{function_name}' outputs: {e}")))?;

    match decoded {
        DynSolValue::Tuple(vals) => Ok(vals.into_iter().map(normalize).collect()),
        other => Ok(vec![normalize(other)]),
    }
}
