use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::Status;

/// CPU state captured when an instruction is fetched, before it executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEvent {
    pub pc: u16,
    pub opcode: u8,
    pub name: &'static str,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub status: Status,
    pub cycles: u64,
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04X}  {:02X}  {:<4} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            self.pc,
            self.opcode,
            self.name,
            self.a,
            self.x,
            self.y,
            self.status.bits(),
            self.sp,
            self.cycles
        )
    }
}

/// Receives one event per executed instruction.
pub trait TraceSink {
    fn instruction(&mut self, event: &TraceEvent);
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct TraceBuffer {
    pub events: Vec<TraceEvent>,
}

impl TraceSink for TraceBuffer {
    fn instruction(&mut self, event: &TraceEvent) {
        self.events.push(event.clone());
    }
}

/// Forwards events to the `log` facade at trace level.
#[derive(Debug, Default)]
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn instruction(&mut self, event: &TraceEvent) {
        log::trace!("{}", event);
    }
}

// Lets the caller keep a handle on a sink after giving it to the CPU
impl<T: TraceSink> TraceSink for Rc<RefCell<T>> {
    fn instruction(&mut self, event: &TraceEvent) {
        self.borrow_mut().instruction(event);
    }
}

/// Adapts a closure into a sink.
pub struct TraceFn<F>(pub F);

impl<F: FnMut(&TraceEvent)> TraceSink for TraceFn<F> {
    fn instruction(&mut self, event: &TraceEvent) {
        (self.0)(event)
    }
}
