mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn default_run_bundles_a_mysql_service() {
    let ctx = TestContext::new();

    ctx.cli()
        .write_stdin("no\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Do you have an existing RDBMS system for Guacamole?"))
        .stdout(predicate::str::contains("Generated docker-compose.yml"));

    let compose = ctx.read_compose();
    assert_eq!(compose["version"], "3.8");
    assert_eq!(compose["services"]["guacamole"]["image"], "guacamole/guacamole");
    assert_eq!(compose["services"]["guacd"]["image"], "guacamole/guacd");
    assert_eq!(compose["services"]["mysql"]["image"], "mysql");
    assert_eq!(compose["services"]["guacamole"]["environment"]["MYSQL_HOSTNAME"], "mysql");
}

#[test]
fn existing_database_and_traefik_are_wired_through() {
    let ctx = TestContext::new();

    ctx.cli()
        .write_stdin(
            "yes\ndb.internal\n3306\nguac\nsecret\nguacdb\nyes\ntraefik\nproxy.internal\n8081\n",
        )
        .assert()
        .success();

    let compose = ctx.read_compose();
    let env = &compose["services"]["guacamole"]["environment"];
    assert_eq!(env["MYSQL_HOSTNAME"], "db.internal");
    assert_eq!(env["MYSQL_DATABASE"], "guacdb");
    assert_eq!(env["MYSQL_USER"], "guac");
    assert_eq!(env["MYSQL_PASSWORD"], "secret");
    assert!(compose["services"].get("mysql").is_none());

    assert_eq!(compose["services"]["traefik"]["image"], "traefik");
    assert_eq!(compose["services"]["traefik"]["ports"][0], "8081:80");
}

#[test]
fn invalid_answers_reprompt_until_valid() {
    let ctx = TestContext::new();

    ctx.cli()
        .write_stdin("sure\nNO\nmaybe\nYES\nCloudflare\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please answer 'yes' or 'no'."))
        .stdout(predicate::str::contains("Generated docker-compose.yml"));

    // Cloudflare terminates outside the stack, so no proxy service appears.
    let compose = ctx.read_compose();
    let services = compose["services"].as_mapping().expect("services should be a mapping");
    assert_eq!(services.len(), 3);
    assert!(compose["services"].get("Cloudflare").is_none());
}

#[test]
fn empty_required_answers_reprompt_until_filled() {
    let ctx = TestContext::new();

    ctx.cli()
        .write_stdin("yes\n\ndb\n3306\nu\np\nn\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("This field is required."));

    let compose = ctx.read_compose();
    assert_eq!(compose["services"]["guacamole"]["environment"]["MYSQL_HOSTNAME"], "db");
}

#[test]
fn rerun_replaces_the_previous_file() {
    let ctx = TestContext::new();

    ctx.cli().write_stdin("no\nyes\ntraefik\n\n8081\n").assert().success();
    assert!(ctx.read_compose()["services"].get("traefik").is_some());

    ctx.cli().write_stdin("no\nno\n").assert().success();
    let compose = ctx.read_compose();
    assert!(compose["services"].get("traefik").is_none());
    assert!(compose["services"].get("mysql").is_some());
}

#[test]
fn closed_stdin_while_prompting_is_a_failure() {
    let ctx = TestContext::new();

    ctx.cli().write_stdin("").assert().failure().stderr(predicate::str::contains("Error:"));

    assert!(!ctx.compose_path().exists());
}
