use optimus_core::{
    crypto::{Domain, Optimus},
    id_encoders::{IdEncoder, IdEncoderError, OptimusIdEncoder, PrefixedIdEncoder},
    settings::OptimusConfig,
};
use optimus_test::test;
use std::sync::Arc;

fn user_encoder() -> PrefixedIdEncoder<OptimusIdEncoder> {
    let optimus = Optimus::new(1580030173, 59260789, 1163945558).unwrap();
    PrefixedIdEncoder::new("user-", OptimusIdEncoder::new(optimus))
}

#[test]
fn obfuscate_round_trip() {
    let encoder = user_encoder();
    assert_eq!(encoder.prefix(), "user-");
    assert_eq!(encoder.obfuscate(15).unwrap(), "user-1103647397");
    assert_eq!(encoder.deobfuscate("user-1103647397").unwrap(), 15);

    for id in [0, 1, 2, 99999, i32::MAX as u64] {
        let external = encoder.obfuscate(id).unwrap();
        assert_eq!(encoder.deobfuscate(&external).unwrap(), id);
    }
}

#[test]
fn rejects_invalid_external_ids() {
    let encoder = user_encoder();
    assert!(matches!(
        encoder.deobfuscate("team-1103647397"),
        Err(IdEncoderError::InvalidObfuscatedId(_))
    ));
    assert!(matches!(
        encoder.deobfuscate("user-abc"),
        Err(IdEncoderError::InvalidObfuscatedId(_))
    ));
    assert!(matches!(
        encoder.deobfuscate("user-4294967296"),
        Err(IdEncoderError::InvalidObfuscatedId(_))
    ));
}

#[test]
fn rejects_id_outside_domain() {
    let encoder = user_encoder();
    let err = encoder.obfuscate(1 << 31).unwrap_err();
    assert!(matches!(err, IdEncoderError::IdOutOfDomain { id, bound } if id == 1 << 31 && bound == i32::MAX as u64));
}

#[test]
fn from_config() {
    let cfg = OptimusConfig::from_json(r#"{"prime": 65521, "random": 4660, "domainBits": 16}"#).unwrap();
    let encoder: Arc<dyn IdEncoder> = Arc::new(OptimusIdEncoder::from_config(&cfg).unwrap());
    assert_eq!(encoder.obfuscate(12345).unwrap(), "16029");
    assert_eq!(encoder.deobfuscate("16029").unwrap(), 12345);
    assert!(encoder.obfuscate(Domain::new(16).unwrap().modulus()).is_err());

    let cfg = OptimusConfig::from_json(r#"{"prime": 15, "random": 1}"#).unwrap();
    assert!(matches!(
        OptimusIdEncoder::from_config(&cfg),
        Err(IdEncoderError::InvalidConfig(_))
    ));
}

#[test]
fn boxed_encoders() {
    let encoders: Vec<Box<dyn IdEncoder>> = vec![
        Box::new(user_encoder()),
        Box::new(OptimusIdEncoder::new(Optimus::new(3, 715827883, 1234567890).unwrap())),
    ];
    for encoder in &encoders {
        let external = encoder.obfuscate(1024).unwrap();
        assert_eq!(encoder.deobfuscate(&external).unwrap(), 1024);
    }
    assert_eq!(encoders[1].obfuscate(1024).unwrap(), "1234570962");
}
