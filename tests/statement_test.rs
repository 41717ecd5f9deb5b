mod common;
use common::*;

#[test]
fn test_hello_world() {
    let mut r = runtime("LET greeting \"Hello\"\nADD greeting \" World\"\nPRINT greeting\n.");
    assert_eq!(exec(&mut r), "Hello World\n");
}

#[test]
fn test_count_down_with_labels() {
    let mut r = runtime(
        r#"LET n 3
top: PRINT n
SUB n 1
GOTO "top" IF n > 0
PRINT "liftoff"
."#,
    );
    assert_eq!(exec(&mut r), "3\n2\n1\nliftoff\n");
}

#[test]
fn test_blank_lines_are_not_statements() {
    let mut r = runtime("PRINT 1\n\n   \nGOTO 2\nPRINT 2\n.");
    assert_eq!(exec(&mut r), "1\n");
}

#[test]
fn test_text_after_dot_is_ignored() {
    let mut r = runtime("PRINT \"a\"\n.\nPRINT \"b\"\n");
    assert_eq!(exec(&mut r), "a\n");
}

#[test]
fn test_comparisons() {
    let mut r = runtime(
        r#"GOTO 2 IF 1 <= 1
PRINT "no"
GOTO 2 IF 2.5 >= 3
PRINT "ge"
GOTO 2 IF "abc" < "abd"
PRINT "no"
GOTO 2 IF 1 <> 1.0
PRINT "ne"
GOTO 2 IF 3 = 3.0
PRINT "no"
."#,
    );
    assert_eq!(exec(&mut r), "ge\nne\n");
}

#[test]
fn test_mixed_arithmetic_promotes_to_real() {
    let mut r = runtime("LET x 3\nADD x 0.5\nPRINT x\nLET y 1.5\nMULT y 2\nPRINT y\n.");
    assert_eq!(exec(&mut r), "3.5\n3.0\n");
}

#[test]
fn test_divide_with_reals() {
    let mut r = runtime("LET x 3\nDIV x 0.5\nPRINT x\nLET y 1\nDIV y 4.0\nPRINT y\n.");
    assert_eq!(exec(&mut r), "6.0\n0\n");
}

#[test]
fn test_subroutine_called_twice() {
    let mut r = runtime(
        r#"LET x 1
GOSUB "double"
GOSUB "double"
PRINT x
END
double: MULT x 2
RETURN
."#,
    );
    assert_eq!(exec(&mut r), "4\n");
}

#[test]
fn test_jump_target_held_in_variable() {
    let mut r = runtime(
        r#"LET where "done"
GOSUB where
PRINT "back"
END
done: PRINT "there"
RETURN
."#,
    );
    assert_eq!(exec(&mut r), "there\nback\n");
}

#[test]
fn test_real_jump_target_in_variable() {
    let mut r = runtime("LET t 1.5\nGOTO t\n.");
    assert_eq!(
        exec(&mut r),
        "TYPE MISMATCH IN LINE 2; jump target 't' holds a real\n"
    );
}

#[test]
fn test_error_stops_output() {
    let mut r = runtime("PRINT 1\nLET x \"a\"\nSUB x 1\nPRINT 2\n.");
    assert_eq!(
        exec(&mut r),
        "1\nTYPE MISMATCH IN LINE 3; cannot subtract integer from text\n"
    );
}

#[test]
fn test_small_cycle_slices_match_one_slice() {
    let source = "LET i 0\nloop: ADD i 1\nGOTO \"loop\" IF i < 50\nPRINT i\n.";
    let mut whole = runtime(source);
    let mut sliced = runtime(source);
    let mut s = String::new();
    while !sliced.is_halted() {
        s.push_str(&exec_n(&mut sliced, 3));
        if s.contains("exceeded") {
            s.clear();
        }
    }
    assert_eq!(exec(&mut whole), "50\n");
    assert_eq!(s, "50\n");
}
