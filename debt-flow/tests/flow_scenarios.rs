use std::sync::Arc;

use debt_flow::{
    FlowController, FlowRunner, InMemorySessionStorage, InstantPacer, RiskLevel, Session, Step,
    TurnStatus, UserInput, prompt::WELCOME_ACCEPT, score,
};

fn choice(value: &str) -> UserInput {
    UserInput::Choice(value.to_string())
}

fn text(value: &str) -> UserInput {
    UserInput::Text(value.to_string())
}

struct Case<'a> {
    bank: &'a str,
    debt_type: &'a str,
    original: &'a str,
    current: &'a str,
    duration: &'a str,
    negative_listing: &'a str,
}

/// Answer every question up to `analyzing`.
fn answer_all(controller: &FlowController, session: &mut Session, case: &Case) {
    let inputs = [
        choice(WELCOME_ACCEPT),
        choice(case.bank),
        choice(case.debt_type),
        text(case.original),
        text(case.current),
        choice(case.duration),
        choice(case.negative_listing),
        choice("not_tried"),
        text("Roberto Alves"),
        text("13999991234"),
    ];
    for input in inputs {
        controller.handle(session, input).unwrap();
    }
}

#[test]
fn credit_card_debt_that_quadrupled_is_high_risk() {
    let controller = FlowController::default();
    let (mut session, _) = controller.start("scenario-a");
    answer_all(
        &controller,
        &mut session,
        &Case {
            bank: "Santander",
            debt_type: "credit_card",
            original: "4000",
            current: "18000",
            duration: "over_5_years",
            negative_listing: "yes",
        },
    );
    assert_eq!(session.step, Step::Analyzing);

    let turn = controller.complete_analysis(&mut session).unwrap();
    assert_eq!(turn.status, TurnStatus::Completed);
    let card = turn.result.unwrap();
    assert_eq!(card.growth_percent, 350);
    assert_eq!(card.points, 100);
    assert_eq!(card.level, RiskLevel::High);
}

#[test]
fn small_financing_debt_is_low_risk() {
    let controller = FlowController::default();
    let (mut session, _) = controller.start("scenario-b");
    answer_all(
        &controller,
        &mut session,
        &Case {
            bank: "Caixa Econômica",
            debt_type: "financing",
            original: "1000",
            current: "1100",
            duration: "6_months_to_1_year",
            negative_listing: "no",
        },
    );

    let risk = score(&session.answers);
    assert_eq!(risk.growth_percent, 10);
    assert_eq!(risk.points, 5);
    assert_eq!(risk.level, RiskLevel::Low);

    let turn = controller.complete_analysis(&mut session).unwrap();
    assert_eq!(turn.result.unwrap().actions.len(), 1);
}

#[test]
fn blank_name_is_ignored() {
    let controller = FlowController::default();
    let (mut session, _) = controller.start("scenario-c");
    for input in [
        choice(WELCOME_ACCEPT),
        choice("PAN"),
        choice("other"),
        text("2000"),
        text("2500"),
        choice("under_6_months"),
        choice("unsure"),
        choice("tried_no_agreement"),
    ] {
        controller.handle(&mut session, input).unwrap();
    }
    assert_eq!(session.step, Step::Name);
    let before = session.transcript.clone();

    for blank in ["", "   ", "\t\n"] {
        let turn = controller.handle(&mut session, text(blank)).unwrap();
        assert_eq!(turn.status, TurnStatus::Ignored);
        assert!(turn.messages.is_empty());
    }

    assert_eq!(session.step, Step::Name);
    assert_eq!(session.transcript, before);
    assert!(session.answers.full_name.is_none());
}

#[test]
fn answers_survive_until_result() {
    let controller = FlowController::default();
    let (mut session, _) = controller.start("keys");
    answer_all(
        &controller,
        &mut session,
        &Case {
            bank: "Crefisa",
            debt_type: "personal_loan",
            original: "50",
            current: "5000",
            duration: "2_to_5_years",
            negative_listing: "no",
        },
    );
    let collected = session.answers.clone();
    controller.complete_analysis(&mut session).unwrap();

    assert_eq!(session.answers, collected);
    assert_eq!(collected.original_amount.as_deref(), Some("500"));
    assert_eq!(collected.current_amount.as_deref(), Some("5000"));
    assert_eq!(collected.full_name.as_deref(), Some("Roberto Alves"));

    // analysis fires once; afterwards input is closed
    assert!(controller.complete_analysis(&mut session).is_err());
    assert!(controller.handle(&mut session, text("again")).is_err());
}

#[tokio::test]
async fn runner_walks_a_full_session() {
    let runner = FlowRunner::new(
        Arc::new(FlowController::default()),
        Arc::new(InMemorySessionStorage::new()),
    );
    let (id, welcome) = runner.start().await.unwrap();
    assert_eq!(welcome.step, Step::Welcome);

    let inputs = [
        choice(WELCOME_ACCEPT),
        choice("BMG"),
        choice("overdraft"),
        text("R$ 3.000"),
        text("R$ 9.500"),
        choice("1_to_2_years"),
        choice("yes"),
        choice("agreement_defaulted"),
        text("Luana Reis"),
    ];
    for input in inputs {
        let turn = runner.respond(&id, input).await.unwrap();
        assert_eq!(turn.status, TurnStatus::WaitingForInput);
    }

    let turn = runner.respond(&id, text("(11) 91234-5678")).await.unwrap();
    assert_eq!(turn.status, TurnStatus::Analyzing);

    let turn = runner.run_analysis(&id, &InstantPacer).await.unwrap();
    let card = turn.result.unwrap();
    // growth 216% (+40), overdraft (+25), 1.5x (+10), listed (+20), BMG (+15)
    assert_eq!(card.points, 110);
    assert_eq!(card.level, RiskLevel::High);
    assert!(card.contact_link.starts_with("https://wa.me/5511912345678?text=Hello%20Luana"));

    let snapshot = runner.snapshot(&id).await.unwrap();
    assert_eq!(snapshot.step, Step::Result);
    assert!(snapshot.result.is_some());
}
