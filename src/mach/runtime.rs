use super::{resolve, Address, Comparison, Operation, Program, Stack, Val, Var, CYCLES, LOOP_LIMIT};
use crate::error;
use crate::lang::ast::{Condition, Opcode, Statement};
use crate::lang::{is_identifier, Error};
use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// ## Virtual machine

/// What the host must do after a slice of execution.
#[derive(Debug, PartialEq)]
pub enum Event {
    /// The program halted or was never started.
    Stopped,
    /// The slice ran out of cycles. Call `execute` again.
    Running,
    /// Text to write, already newline terminated.
    Print(String),
    /// An input statement is waiting for `enter`.
    Input(InputKind),
    /// The run was abandoned.
    Error(Error),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputKind {
    Number,
    Text,
}

/// Result of executing one statement.
enum Flow {
    Next,
    Jump(Address),
    Print(String),
    Wait(InputKind, String),
}

enum State {
    Running,
    Input(InputKind, String),
    Halted,
}

pub struct Runtime {
    program: Rc<Program>,
    pc: Address,
    vars: Var,
    stack: Stack<Address>,
    entries: HashMap<Address, usize>,
    loop_limit: usize,
    state: State,
    entry: Option<String>,
    interrupted: bool,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Program::default())
    }
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        Runtime {
            program: Rc::new(program),
            pc: 0,
            vars: Var::new(),
            stack: Stack::new("TOO MANY NESTED GOSUBS"),
            entries: HashMap::new(),
            loop_limit: LOOP_LIMIT,
            state: State::Running,
            entry: None,
            interrupted: false,
        }
    }

    pub fn set_loop_limit(&mut self, limit: usize) {
        self.loop_limit = limit;
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    /// Index of the statement about to execute.
    pub fn pc(&self) -> Address {
        self.pc
    }

    pub fn is_halted(&self) -> bool {
        matches!(self.state, State::Halted)
    }

    /// Supply a line to a waiting `INNUM` or `INSTR`.
    pub fn enter(&mut self, line: &str) {
        self.entry = Some(line.to_string());
    }

    /// Abandon the run at the next call to `execute`.
    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    /// Start over from the first line with empty variables.
    pub fn restart(&mut self) {
        self.pc = 0;
        self.vars.clear();
        self.stack.clear();
        self.entries.clear();
        self.state = State::Running;
        self.entry = None;
        self.interrupted = false;
    }

    /// Run at most `cycles` statements and report why execution paused.
    pub fn execute(&mut self, cycles: usize) -> Event {
        match self.execute_loop(cycles) {
            Ok(event) => event,
            Err(error) => {
                debug!(%error, "run abandoned");
                self.halt();
                Event::Error(error)
            }
        }
    }

    /// Drive the program to completion over blocking line I/O.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<()> {
        self.run_until(input, output, CYCLES, || false)
    }

    /// Like `run`, but executes `cycles` statements at a time and polls
    /// `interrupted` before each slice. A `true` poll ends the run with
    /// BREAK. A line read for a waiting input statement is not consumed
    /// when the poll after it breaks.
    pub fn run_until<R, W, F>(
        &mut self,
        mut input: R,
        mut output: W,
        cycles: usize,
        mut interrupted: F,
    ) -> Result<()>
    where
        R: BufRead,
        W: Write,
        F: FnMut() -> bool,
    {
        loop {
            if interrupted() {
                self.interrupt();
            }
            match self.execute(cycles) {
                Event::Stopped => break,
                Event::Running => {}
                Event::Print(s) => output.write_all(s.as_bytes())?,
                Event::Input(_) => {
                    output.flush()?;
                    let mut line = String::new();
                    if input.read_line(&mut line)? == 0 {
                        let error = error!(InputPastEnd, Some(self.pc));
                        self.halt();
                        return Err(error);
                    }
                    self.enter(&line);
                }
                Event::Error(error) => {
                    output.flush()?;
                    return Err(error);
                }
            }
        }
        output.flush()?;
        Ok(())
    }

    fn halt(&mut self) {
        self.pc = self.program.len();
        self.state = State::Halted;
        self.entry = None;
    }

    fn execute_loop(&mut self, cycles: usize) -> Result<Event> {
        if self.interrupted {
            self.interrupted = false;
            if !self.is_halted() {
                return Err(error!(Break, Some(self.pc)));
            }
        }
        if let State::Input(kind, var_name) = &self.state {
            let (kind, var_name) = (*kind, var_name.clone());
            match self.entry.take() {
                None => return Ok(Event::Input(kind)),
                Some(line) => {
                    let val = match kind {
                        InputKind::Number => parse_number(&line),
                        InputKind::Text => Ok(Val::Text(strip_line_ending(&line).to_string())),
                    };
                    let val = val.map_err(|e| e.in_line_number(Some(self.pc)))?;
                    self.vars.store(&var_name, val);
                    self.state = State::Running;
                    self.pc += 1;
                }
            }
        }
        if self.is_halted() {
            return Ok(Event::Stopped);
        }
        let program = Rc::clone(&self.program);
        for _ in 0..cycles {
            let statement = match program.get(self.pc) {
                Some(statement) => statement,
                None => {
                    debug!(line = self.pc, "halted");
                    self.halt();
                    return Ok(Event::Stopped);
                }
            };
            self.count_entry()?;
            trace!(line = self.pc, %statement, "execute");
            let flow = self
                .step(statement)
                .map_err(|e| e.in_line_number(Some(self.pc)))?;
            match flow {
                Flow::Next => self.pc += 1,
                Flow::Jump(addr) => {
                    debug!(from = self.pc, to = addr, "jump");
                    self.pc = addr;
                }
                Flow::Print(s) => {
                    self.pc += 1;
                    return Ok(Event::Print(s));
                }
                Flow::Wait(kind, var_name) => {
                    self.state = State::Input(kind, var_name);
                    return Ok(Event::Input(kind));
                }
            }
        }
        Ok(Event::Running)
    }

    fn count_entry(&mut self) -> Result<()> {
        let count = self.entries.entry(self.pc).or_insert(0);
        *count += 1;
        if *count > self.loop_limit {
            return Err(error!(InfiniteLoop, Some(self.pc);
                "line entered more than {} times", self.loop_limit));
        }
        Ok(())
    }

    fn step(&mut self, statement: &Statement) -> Result<Flow> {
        use Opcode::*;
        match statement.opcode() {
            Let(var_name, token) => {
                if !is_identifier(var_name) {
                    return Err(error!(SyntaxError; "'{}' is not a variable name", var_name));
                }
                let val = self.vars.evaluate(token);
                self.vars.store(var_name, val);
                Ok(Flow::Next)
            }
            Print(token) => Ok(Flow::Print(format!("{}\n", self.vars.evaluate(token)))),
            Innum(var_name) => Ok(Flow::Wait(InputKind::Number, var_name.clone())),
            Instr(var_name) => Ok(Flow::Wait(InputKind::Text, var_name.clone())),
            Add(var_name, token) => self.arithmetic(var_name, token, Operation::sum),
            Sub(var_name, token) => self.arithmetic(var_name, token, Operation::subtract),
            Mult(var_name, token) => self.arithmetic(var_name, token, Operation::multiply),
            Div(var_name, token) => self.arithmetic(var_name, token, Operation::divide),
            Goto(target, condition) => self.jump(target, condition.as_ref()),
            Gosub(target, condition) => match self.jump(target, condition.as_ref())? {
                Flow::Jump(addr) => {
                    self.stack.push(self.pc + 1)?;
                    debug!(depth = self.stack.len(), "gosub");
                    Ok(Flow::Jump(addr))
                }
                flow => Ok(flow),
            },
            Return => match self.stack.pop() {
                Some(addr) => {
                    debug!(depth = self.stack.len(), "return");
                    Ok(Flow::Jump(addr))
                }
                None => Err(error!(ReturnWithoutGosub)),
            },
            End | Dot => Ok(Flow::Jump(self.program.len())),
        }
    }

    fn arithmetic(
        &mut self,
        var_name: &str,
        token: &str,
        op: fn(Val, Val) -> Result<Val>,
    ) -> Result<Flow> {
        let operand = self.vars.evaluate(token);
        let current = self.vars.fetch(var_name);
        self.vars.store(var_name, op(current, operand)?);
        Ok(Flow::Next)
    }

    fn jump(&self, target: &str, condition: Option<&Condition>) -> Result<Flow> {
        if let Some(condition) = condition {
            if !self.test(condition)? {
                return Ok(Flow::Next);
            }
        }
        let addr = resolve(
            target,
            self.pc,
            self.program.len(),
            self.program.labels(),
            &self.vars,
        )?;
        Ok(Flow::Jump(addr))
    }

    fn test(&self, condition: &Condition) -> Result<bool> {
        let comparison = match Comparison::from_operator(&condition.operator) {
            Some(comparison) => comparison,
            None => {
                return Err(error!(InvalidCondition;
                    "unknown comparison '{}'", condition.operator))
            }
        };
        let left = self.vars.evaluate(&condition.left);
        let right = self.vars.evaluate(&condition.right);
        Operation::compare(&left, comparison, &right)
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

/// Whole numbers become integers, everything else a real.
fn parse_number(line: &str) -> Result<Val> {
    let text = line.trim();
    if let Ok(i) = text.parse::<i64>() {
        return Ok(Val::Integer(i));
    }
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => {
            if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
                Ok(Val::Integer(n as i64))
            } else {
                Ok(Val::Real(n))
            }
        }
        _ => Err(error!(InvalidInput; "'{}' is not a number", text)),
    }
}
