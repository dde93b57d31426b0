use serde_json::json;

use crate::models::transaction::{
    AppCall, AppCallSubType, AssetConfig, AssetConfigSubType, KeyReg, KeyRegSubType, OnCompletion,
};
use crate::models::*;

const OP_UP_PROGRAM: &str = "CIEB";

fn op_up_call() -> AppCall {
    AppCall {
        application_id: None,
        created_application_id: Some(1001),
        on_completion: OnCompletion::Delete,
        approval_program: Some(OP_UP_PROGRAM.to_string()),
        clear_state_program: Some(OP_UP_PROGRAM.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_deserialize_payment() {
    let transaction: Transaction = serde_json::from_value(json!({
        "id": "TX1",
        "sender": "X",
        "type": "payment",
        "receiver": "Y",
        "amount": 5
    }))
    .unwrap();

    assert_eq!(transaction.id, "TX1");
    assert_eq!(transaction.sender, Address::from("X"));
    assert_eq!(transaction.kind.transaction_type(), TransactionType::Payment);
    match transaction.kind {
        TransactionKind::Payment(payment) => {
            assert_eq!(payment.receiver, Address::from("Y"));
            assert_eq!(payment.amount, 5);
            assert!(payment.close_remainder.is_none());
        },
        other => panic!("expected a payment, got {:?}", other),
    }
}

#[test]
fn test_deserialize_app_call_with_inner_transactions() {
    let transaction: Transaction = serde_json::from_value(json!({
        "id": "TX1",
        "sender": "X",
        "type": "appCall",
        "applicationId": 42,
        "onCompletion": "noOp",
        "innerTransactions": [
            { "id": "TX1/inner/1", "sender": "APP", "type": "stateProof" }
        ]
    }))
    .unwrap();

    let call = match &transaction.kind {
        TransactionKind::AppCall(call) => call,
        other => panic!("expected an app call, got {:?}", other),
    };
    assert_eq!(call.resolved_application_id(), Some(42));
    assert_eq!(call.sub_type(), AppCallSubType::Call);
    assert!(!call.is_op_up());
    assert_eq!(call.inner_transactions.len(), 1);
    assert_eq!(call.inner_transactions[0].kind, TransactionKind::StateProof);
}

#[test]
fn test_unknown_kind_is_rejected() {
    let result = serde_json::from_value::<Transaction>(json!({
        "id": "TX1",
        "sender": "X",
        "type": "heartbeat"
    }));
    assert!(result.is_err(), "unknown transaction kinds should not deserialize");
}

#[test]
fn test_op_up_detection() {
    assert!(op_up_call().is_op_up());

    let not_deleted = AppCall { on_completion: OnCompletion::NoOp, ..op_up_call() };
    assert!(!not_deleted.is_op_up(), "a fee-bump application deletes itself");

    let existing = AppCall { application_id: Some(1001), ..op_up_call() };
    assert!(!existing.is_op_up(), "only create calls can be fee bumps");

    let real_program = AppCall { approval_program: Some("CCABAQ==".to_string()), ..op_up_call() };
    assert!(!real_program.is_op_up());

    let flagged = AppCall { application_id: Some(7), op_up: true, ..Default::default() };
    assert!(flagged.is_op_up(), "the upstream flag wins");
}

#[test]
fn test_app_call_sub_types() {
    let create = AppCall { created_application_id: Some(5), ..Default::default() };
    assert_eq!(create.sub_type(), AppCallSubType::Create);
    assert_eq!(create.resolved_application_id(), Some(5));

    let zero_id = AppCall { application_id: Some(0), created_application_id: Some(5), ..Default::default() };
    assert!(zero_id.is_create());
    assert_eq!(zero_id.resolved_application_id(), Some(5));

    let update = AppCall { application_id: Some(5), on_completion: OnCompletion::Update, ..Default::default() };
    assert_eq!(update.sub_type(), AppCallSubType::Update);
}

#[test]
fn test_asset_config_sub_types() {
    let create = AssetConfig { asset_id: Some(0), created_asset_id: Some(77), sub_type: None };
    assert_eq!(create.resolved_asset_id(), Some(77));
    assert_eq!(create.sub_type(), AssetConfigSubType::Create);

    let reconfigure = AssetConfig { asset_id: Some(77), created_asset_id: None, sub_type: None };
    assert_eq!(reconfigure.sub_type(), AssetConfigSubType::Reconfigure);

    let destroy = AssetConfig { asset_id: Some(77), created_asset_id: None, sub_type: Some(AssetConfigSubType::Destroy) };
    assert_eq!(destroy.sub_type(), AssetConfigSubType::Destroy);

    let empty = AssetConfig { asset_id: None, created_asset_id: None, sub_type: None };
    assert_eq!(empty.resolved_asset_id(), None);
}

#[test]
fn test_key_reg_sub_types() {
    let online = KeyReg { vote_participation_key: Some("dm90ZQ==".to_string()), selection_participation_key: None };
    assert_eq!(online.sub_type(), KeyRegSubType::Online);
    assert_eq!(KeyReg::default().sub_type(), KeyRegSubType::Offline);
}

#[test]
fn test_transaction_type_display() {
    assert_eq!(TransactionType::AppCall.to_string(), "Application Call");
    assert_eq!(TransactionType::KeyReg.to_string(), "Key Registration");
}

#[test]
fn test_vertical_serialization() {
    let account = Vertical {
        id: 0,
        kind: VerticalKind::Account { account_address: Address::from("X") },
    };
    assert_eq!(
        serde_json::to_value(&account).unwrap(),
        json!({ "id": 0, "type": "account", "accountAddress": "X" })
    );

    let fee = Vertical { id: 3, kind: VerticalKind::SyntheticFeeParticipant };
    assert_eq!(serde_json::to_value(&fee).unwrap(), json!({ "id": 3, "type": "syntheticFeeParticipant" }));
}

#[test]
fn test_application_account_numbers() {
    let application = Vertical {
        id: 1,
        kind: VerticalKind::Application {
            application_id: 42,
            linked_account: LinkedAccount { account_address: Address::from("APP"), account_number: 0 },
            rekeyed_accounts: vec![LinkedAccount { account_address: Address::from("R"), account_number: 1 }],
        },
    };

    assert_eq!(application.key(), Some(ParticipantKey::Application(42)));
    assert_eq!(application.application_account_number(&Address::from("APP")), Some(0));
    assert_eq!(application.application_account_number(&Address::from("R")), Some(1));
    assert_eq!(application.application_account_number(&Address::from("Z")), None);

    let placeholder = Vertical { id: 2, kind: VerticalKind::Placeholder };
    assert_eq!(placeholder.key(), None);
}

#[test]
fn test_visualization_serialization_skips_unset_ends() {
    let edge = Visualization {
        from_vertical_index: Some(0),
        from_account_index: None,
        to_vertical_index: Some(1),
        to_account_index: None,
        direction: Some(Direction::LeftToRight),
        shape: Shape::Vector,
        description: Description::Payment { amount: 5 },
    };

    assert_eq!(
        serde_json::to_value(&edge).unwrap(),
        json!({
            "fromVerticalIndex": 0,
            "toVerticalIndex": 1,
            "direction": "leftToRight",
            "shape": "vector",
            "description": { "type": "payment", "amount": 5 }
        })
    );
}

#[test]
fn test_from_to_accessors() {
    assert_eq!(FromTo::account(2, 1).vertical_id(), Some(2));
    assert_eq!(FromTo::account(2, 1).account_number(), Some(1));
    assert_eq!(FromTo::vertical(2).account_number(), None);
    assert!(FromTo::Fallback.is_fallback());
    assert_eq!(FromTo::Fallback.vertical_id(), None);
}
