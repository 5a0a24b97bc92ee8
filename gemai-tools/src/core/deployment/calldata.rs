// Copyright 2026, GemAI Labs
// For licensing, see https://github.com/gemai-labs/gemai-deployer/blob/main/licenses/COPYRIGHT.md

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::{Constructor, StateMutability},
    primitives::U256,
};

use super::DeploymentError;

/// Builds the initcode for a deployment: creation bytecode with the
/// ABI-encoded constructor arguments appended. Arguments are coerced against
/// the ABI constructor's input types; no further validation is performed.
pub fn encode_constructor_calldata(
    bytecode: &[u8],
    constructor: Option<&Constructor>,
    constructor_args: &[String],
    constructor_value: U256,
) -> Result<Vec<u8>, DeploymentError> {
    let Some(constructor) = constructor else {
        if !constructor_args.is_empty() {
            return Err(DeploymentError::InvalidConstructor(format!(
                "contract declares no constructor; got {} argument(s)",
                constructor_args.len(),
            )));
        }
        return Ok(bytecode.to_vec());
    };

    if constructor.state_mutability != StateMutability::Payable && !constructor_value.is_zero() {
        return Err(DeploymentError::InvalidConstructor(
            "attempting to send Ether to non-payable constructor".to_string(),
        ));
    }
    if constructor_args.len() != constructor.inputs.len() {
        return Err(DeploymentError::InvalidConstructor(format!(
            "mismatch number of constructor arguments (want {:?} ({}); got {})",
            constructor.inputs,
            constructor.inputs.len(),
            constructor_args.len(),
        )));
    }

    let mut arg_values = Vec::<DynSolValue>::with_capacity(constructor_args.len());
    for (arg, param) in constructor_args.iter().zip(constructor.inputs.iter()) {
        let ty = param.resolve().map_err(|err| {
            DeploymentError::InvalidConstructor(format!(
                "could not resolve constructor arg {param}: {err}"
            ))
        })?;
        let value = ty.coerce_str(arg).map_err(|err| {
            DeploymentError::InvalidConstructor(format!(
                "could not parse constructor arg {param}: {err}"
            ))
        })?;
        arg_values.push(value);
    }

    let encoded_args = constructor
        .abi_encode_input_raw(&arg_values)
        .map_err(|err| DeploymentError::InvalidConstructor(err.to_string()))?;

    let mut initcode = bytecode.to_vec();
    initcode.extend(encoded_args);
    Ok(initcode)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const GEMAI_TOKEN: &str = "0xFBE44caE91d7Df8382208fCdc1fE80E40FBc7e9a";
    const BYTECODE: &[u8] = &[0x60, 0x0a, 0x60, 0x0c, 0x60, 0x00, 0x39];

    fn address_constructor(state_mutability: &str) -> Constructor {
        serde_json::from_value(json!({
            "type": "constructor",
            "stateMutability": state_mutability,
            "inputs": [
                { "name": "gemaiToken", "type": "address", "internalType": "address" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn appends_address_argument_verbatim() {
        let constructor = address_constructor("nonpayable");
        let initcode = encode_constructor_calldata(
            BYTECODE,
            Some(&constructor),
            &[GEMAI_TOKEN.to_string()],
            U256::ZERO,
        )
        .unwrap();

        assert_eq!(&initcode[..BYTECODE.len()], BYTECODE);
        let word = &initcode[BYTECODE.len()..];
        assert_eq!(word.len(), 32);
        assert_eq!(&word[..12], &[0u8; 12]);
        assert_eq!(
            hex::encode(&word[12..]),
            "fbe44cae91d7df8382208fcdc1fe80e40fbc7e9a"
        );
    }

    #[test]
    fn encoding_is_idempotent() {
        let constructor = address_constructor("nonpayable");
        let args = [GEMAI_TOKEN.to_string()];
        let first =
            encode_constructor_calldata(BYTECODE, Some(&constructor), &args, U256::ZERO).unwrap();
        let second =
            encode_constructor_calldata(BYTECODE, Some(&constructor), &args, U256::ZERO).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_argument_count_mismatch() {
        let constructor = address_constructor("nonpayable");
        let err =
            encode_constructor_calldata(BYTECODE, Some(&constructor), &[], U256::ZERO).unwrap_err();
        assert!(matches!(err, DeploymentError::InvalidConstructor(_)));
    }

    #[test]
    fn rejects_value_to_non_payable_constructor() {
        let constructor = address_constructor("nonpayable");
        let err = encode_constructor_calldata(
            BYTECODE,
            Some(&constructor),
            &[GEMAI_TOKEN.to_string()],
            U256::from(1),
        )
        .unwrap_err();
        assert!(matches!(err, DeploymentError::InvalidConstructor(_)));
    }

    #[test]
    fn allows_value_to_payable_constructor() {
        let constructor = address_constructor("payable");
        let initcode = encode_constructor_calldata(
            BYTECODE,
            Some(&constructor),
            &[GEMAI_TOKEN.to_string()],
            U256::from(1),
        )
        .unwrap();
        assert_eq!(initcode.len(), BYTECODE.len() + 32);
    }

    #[test]
    fn rejects_uncoercible_argument() {
        let constructor = address_constructor("nonpayable");
        let err = encode_constructor_calldata(
            BYTECODE,
            Some(&constructor),
            &["not-an-address".to_string()],
            U256::ZERO,
        )
        .unwrap_err();
        assert!(matches!(err, DeploymentError::InvalidConstructor(_)));
    }

    #[test]
    fn no_constructor_leaves_bytecode_untouched() {
        let initcode = encode_constructor_calldata(BYTECODE, None, &[], U256::ZERO).unwrap();
        assert_eq!(initcode, BYTECODE);
    }

    #[test]
    fn rejects_arguments_without_constructor() {
        let err = encode_constructor_calldata(
            BYTECODE,
            None,
            &[GEMAI_TOKEN.to_string()],
            U256::ZERO,
        )
        .unwrap_err();
        assert!(matches!(err, DeploymentError::InvalidConstructor(_)));
    }
}
