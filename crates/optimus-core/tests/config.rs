use optimus_core::settings::OptimusConfig;
use optimus_test::test;
use std::{env, fs, path::PathBuf};

fn write_config(name: &str, content: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("optimus-{}-{name}", std::process::id()));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn load_with_env_overlay() {
    let path = write_config(
        "config.json",
        r#"{"prime": 2123809381, "random": 146808189, "domainBits": 31}"#,
    );

    env::set_var("OPTIMUS--RANDOM", "1163945558");
    env::set_var("OPTIMUS--PRIME", "1580030173");
    env::set_var("OPTIMUS--MOD_INVERSE", "59260789");

    let cfg = OptimusConfig::load(Some(&path)).unwrap();
    log::info!("{cfg:#?}");
    fs::remove_file(&path).unwrap();

    env::remove_var("OPTIMUS--RANDOM");
    env::remove_var("OPTIMUS--PRIME");
    env::remove_var("OPTIMUS--MOD_INVERSE");

    assert_eq!(cfg.prime, 1580030173);
    assert_eq!(cfg.mod_inverse, Some(59260789));
    assert_eq!(cfg.random, 1163945558);
    assert_eq!(cfg.domain_bits, 31);
    assert_eq!(cfg.rounds, 20);

    let optimus = cfg.build().unwrap();
    assert_eq!(optimus.encode(99999), 1458223381);
    assert_eq!(optimus.decode(1458223381), 99999);
}
