// tests/parser_tests.rs

use padlock::{
    parse, parse_with, Ast, CharSet, Element, EofContext, ErrorKind, EventLog, Instruction,
    NameMode, ParseEvent, ParseOptions, Region,
};

use Instruction::*;

fn plain(input: &str) -> Ast {
    parse(input, &ParseOptions::plain()).unwrap()
}

fn ins(i: Instruction) -> Element {
    Element::Instruction(i)
}

fn name(n: &str) -> Element {
    Element::Name(n.to_string())
}

fn branch(elements: Vec<Element>) -> Element {
    Element::Branch(elements.into())
}

// ---
// Scenarios
// ---

#[test]
fn test_single_terminator() {
    let ast = plain("N");
    assert_eq!(ast.root().elements(), &[ins(Nil)]);
}

#[test]
fn test_split_into_two_nils() {
    let ast = plain("SNN");
    assert_eq!(
        ast.root().elements(),
        &[ins(Split), branch(vec![ins(Nil)]), branch(vec![ins(Nil)])]
    );
}

#[test]
fn test_name_literal() {
    let options = ParseOptions::plain().with_names(NameMode::Unrestricted);
    let ast = parse("PaliceP N", &options).unwrap();
    assert_eq!(ast.root().elements(), &[ins(Name), name("alice"), ins(Nil)]);
}

#[test]
fn test_restricted_name_drops_letters() {
    let ast = plain("PaliceP N");
    assert_eq!(ast.root().elements(), &[ins(Name), name(""), ins(Nil)]);
}

#[test]
fn test_decrypt_takes_two_names() {
    let options = ParseOptions::plain().with_names(NameMode::Unrestricted);
    let ast = parse("KaPbPN", &options).unwrap();
    assert_eq!(
        ast.root().elements(),
        &[ins(Decrypt), name("a"), name("b"), ins(Nil)]
    );
}

#[test]
fn test_eof_after_split() {
    let err = parse("S", &ParseOptions::plain()).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::UnexpectedEof {
            context: EofContext::AwaitingInstruction
        }
    );
    assert_eq!(err.offset, 1);
}

#[test]
fn test_symbol_after_program_end() {
    let err = parse("SNN  N", &ParseOptions::plain()).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::InvalidSymbol {
            symbol: 'N',
            instruction: Nil
        }
    );
    assert_eq!(err.offset, 5);
}

#[test]
fn test_eof_inside_name() {
    let options = ParseOptions::plain().with_names(NameMode::Unrestricted);
    let err = parse("EaPb", &options).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::UnexpectedEof {
            context: EofContext::InName
        }
    );
    assert_eq!(err.offset, 4);
}

// ---
// Structure
// ---

#[test]
fn test_nested_splits_fill_first_then_second() {
    // split( split(nil, nil), send a b nil )
    let options = ParseOptions::plain().with_names(NameMode::Unrestricted);
    let ast = parse("S S N N E aPbP N", &options).unwrap();
    assert_eq!(
        ast.root().elements(),
        &[
            ins(Split),
            branch(vec![
                ins(Split),
                branch(vec![ins(Nil)]),
                branch(vec![ins(Nil)]),
            ]),
            branch(vec![ins(Send), name("a"), name("b"), ins(Nil)]),
        ]
    );
}

#[test]
fn test_split_in_second_branch() {
    let ast = plain("SN SNN");
    assert_eq!(
        ast.root().elements(),
        &[
            ins(Split),
            branch(vec![ins(Nil)]),
            branch(vec![
                ins(Split),
                branch(vec![ins(Nil)]),
                branch(vec![ins(Nil)]),
            ]),
        ]
    );
}

#[test]
fn test_receive_then_split() {
    let options = ParseOptions::plain().with_names(NameMode::Unrestricted);
    let ast = parse("RcPxP SNN", &options).unwrap();
    assert_eq!(ast.root().len(), 6);
    assert_eq!(ast.root().get(3), Some(&ins(Split)));
    assert_eq!(ast.split_count(), 1);
}

#[test]
fn test_names_may_contain_symbols() {
    let ast = plain("PNSKP N");
    assert_eq!(ast.root().elements(), &[ins(Name), name("NSK"), ins(Nil)]);
}

#[test]
fn test_unrestricted_names_skip_whitespace() {
    let options = ParseOptions::plain().with_names(NameMode::Unrestricted);
    let ast = parse("Pa b\tcP N", &options).unwrap();
    assert_eq!(ast.root().get(1), Some(&name("abc")));
}

#[test]
fn test_visual_symbols() {
    let ast = parse("\u{1F513}\u{1F512}\u{1F512}", &ParseOptions::default()).unwrap();
    assert_eq!(ast, plain("SNN"));
    assert_eq!(ast.to_string(), "\u{1F513} \n  \u{1F512} \n  \u{1F512} ");
}

#[test]
fn test_plain_letters_are_ignored_in_visual_mode() {
    let ast = parse("SNN \u{1F512}", &ParseOptions::default()).unwrap();
    assert_eq!(ast.root().elements(), &[ins(Nil)]);
}

#[test]
fn test_render_plain() {
    let options = ParseOptions::plain().with_names(NameMode::Unrestricted);
    let ast = parse("S PxP N S N N", &options).unwrap();
    assert_eq!(
        ast.render(CharSet::Plain),
        "S \n  P 'x' N \n  S \n    N \n    N "
    );
}

// ---
// Observer
// ---

#[test]
fn test_observer_sees_tokenizer_steps() {
    let mut log = EventLog::new();
    parse_with("S N x N", &ParseOptions::plain(), &mut log).unwrap();

    assert_eq!(log.events.first(), Some(&ParseEvent::Start));
    assert!(log.events.contains(&ParseEvent::Branching { offset: 0 }));
    assert!(log.events.contains(&ParseEvent::EnterSecondBranch { offset: 2 }));
    assert!(log.events.contains(&ParseEvent::Ignored {
        offset: 4,
        ch: 'x',
        region: Region::ProgramBody
    }));
    assert_eq!(log.events.last(), Some(&ParseEvent::ProgramEnd { offset: 6 }));
}

#[test]
fn test_separate_observers_do_not_share_state() {
    let mut first = EventLog::new();
    let mut second = EventLog::new();
    parse_with("N", &ParseOptions::plain(), &mut first).unwrap();
    parse_with("SNN", &ParseOptions::plain(), &mut second).unwrap();
    assert_eq!(first.events.len(), 3);
    assert!(second.events.len() > first.events.len());
}
