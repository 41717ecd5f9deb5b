/*!
# Introductory Tutorial for Grin

A Grin program is a list of statements, one per line, ending with a line
that holds a single `.`. Give the program to `grin` as a file or type it
straight in. Nothing runs until the `.` is seen.

<pre><code>&nbsp;> LET greeting "Hello"
&nbsp;> ADD greeting " World"
&nbsp;> PRINT greeting
&nbsp;> .
&nbsp;  Hello World
</code></pre>

Stop a running program with CTRL-C.

## Values

Variables need no declaration. A variable that was never assigned reads
as the integer `0`. Every variable holds one of three kinds of value and
may hold a different kind after its next assignment.

* Integers: `42`
* Reals: `2.5`, `-7` (a leading minus sign makes a real)
* Text: `"Boo"`

`PRINT` shows reals with a decimal point even when they are whole, so
`LET x -7` followed by `PRINT x` shows `-7.0`.

## Statements

| Statement | Effect |
|---|---|
| `LET v x` | store `x` in `v` |
| `PRINT x` | print `x` and a newline |
| `INNUM v` | read a number into `v` |
| `INSTR v` | read a line of text into `v` |
| `ADD v x` | `v` plus `x`; two texts are joined |
| `SUB v x` | `v` minus `x` |
| `MULT v x` | `v` times `x`; text times an integer repeats the text |
| `DIV v x` | `v` divided by `x` |
| `GOTO t [IF a op b]` | jump to `t` |
| `GOSUB t [IF a op b]` | jump to `t`, remembering where to come back |
| `RETURN` | go back to the line after the last `GOSUB` |
| `END` | stop the program |

Dividing two whole numbers gives a whole number rounded down, toward
negative infinity, so `-7` divided by `2` is `-4`. If either side has a
fraction the result is a real.

## Jumps

Any line may start with a label followed by a colon. A jump target is an
integer offset counted from the jumping line, a label in quotes, or a
variable holding either one.

<pre><code>&nbsp;> LET i 0
&nbsp;> top: ADD i 1
&nbsp;> PRINT i
&nbsp;> GOTO "top" IF i < 3
&nbsp;> GOTO 2
&nbsp;> PRINT "never"
&nbsp;> .
&nbsp;  1
&nbsp;  2
&nbsp;  3
</code></pre>

`GOTO 2` skips the line after it and lands on the closing `.`, which ends
the program. An offset may also land exactly one line past the end. Comparisons are `<`, `<=`, `>`, `>=`, `=` and `<>`.
Numbers compare with numbers and text with text; mixing them is an error.

## Errors

Every error stops the program and reports the line it happened on,
counting the first statement as line 1.

<pre><code>&nbsp;> LET x 1
&nbsp;> DIV x 0
&nbsp;> .
&nbsp;  <b>DIVISION BY ZERO IN LINE 2</b>
</code></pre>

A line that runs more than 1000 times stops the program with
`INFINITE LOOP`. Use `--loop-limit` to allow more.

*/
