//! Recording bus and output mocks
//!
//! Both mocks append to one shared log so tests can check the order of
//! bus traffic relative to LED writes.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use colorsense_hal::{I2cBus, OutputPort};

/// One call on either capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Begin,
    Write(u8, Vec<u8>),
    Read(u8, usize),
    Configure(u8),
    Digital(u8, bool),
    Pwm(u8, u8),
}

/// Output port operations, for targeting faults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Configure,
    Digital,
    Pwm,
}

pub type Log = Rc<RefCell<Vec<Event>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFault(pub u8);

/// Bus replaying queued read responses
///
/// Once the queue is empty, reads return 0xFF like an unanswered bus
/// held up by its pull-ups.
pub struct MockBus {
    log: Log,
    reads: VecDeque<Result<Vec<u8>, BusFault>>,
    fail_writes: bool,
}

impl MockBus {
    pub fn new(log: &Log) -> Self {
        Self {
            log: Rc::clone(log),
            reads: VecDeque::new(),
            fail_writes: false,
        }
    }

    /// Queue the bytes returned by the next read
    pub fn respond(mut self, bytes: &[u8]) -> Self {
        self.reads.push_back(Ok(bytes.to_vec()));
        self
    }

    /// Make the next read fail
    pub fn fail_read(mut self) -> Self {
        self.reads.push_back(Err(BusFault));
        self
    }

    /// Make every write fail
    pub fn fail_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn push_response(&mut self, bytes: &[u8]) {
        self.reads.push_back(Ok(bytes.to_vec()));
    }
}

impl I2cBus for MockBus {
    type Error = BusFault;

    fn begin(&mut self) -> Result<(), BusFault> {
        self.log.borrow_mut().push(Event::Begin);
        Ok(())
    }

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), BusFault> {
        self.log
            .borrow_mut()
            .push(Event::Write(address, data.to_vec()));
        if self.fail_writes {
            Err(BusFault)
        } else {
            Ok(())
        }
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), BusFault> {
        self.log.borrow_mut().push(Event::Read(address, buf.len()));
        match self.reads.pop_front() {
            Some(Ok(bytes)) => {
                buf.copy_from_slice(&bytes[..buf.len()]);
                Ok(())
            }
            Some(Err(fault)) => Err(fault),
            None => {
                buf.fill(0xFF);
                Ok(())
            }
        }
    }
}

/// Output port recording every write
pub struct MockPort {
    log: Log,
    /// Failing pins, optionally limited to one kind of call
    faults: Vec<(u8, Option<Call>)>,
}

impl MockPort {
    pub fn new(log: &Log) -> Self {
        Self {
            log: Rc::clone(log),
            faults: Vec::new(),
        }
    }

    /// Make every call on `pin` fail
    pub fn failing(mut self, pin: u8) -> Self {
        self.faults.push((pin, None));
        self
    }

    /// Make only `call` on `pin` fail
    pub fn failing_call(mut self, pin: u8, call: Call) -> Self {
        self.faults.push((pin, Some(call)));
        self
    }

    fn check(&self, pin: u8, call: Call) -> Result<(), OutputFault> {
        let failing = self
            .faults
            .iter()
            .any(|&(p, c)| p == pin && c.map_or(true, |c| c == call));
        if failing {
            Err(OutputFault(pin))
        } else {
            Ok(())
        }
    }
}

impl OutputPort for MockPort {
    type Error = OutputFault;

    fn configure_digital_output(&mut self, pin: u8) -> Result<(), OutputFault> {
        self.log.borrow_mut().push(Event::Configure(pin));
        self.check(pin, Call::Configure)
    }

    fn write_digital(&mut self, pin: u8, high: bool) -> Result<(), OutputFault> {
        self.log.borrow_mut().push(Event::Digital(pin, high));
        self.check(pin, Call::Digital)
    }

    fn write_pwm(&mut self, pin: u8, duty: u8) -> Result<(), OutputFault> {
        self.log.borrow_mut().push(Event::Pwm(pin, duty));
        self.check(pin, Call::Pwm)
    }
}

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Take the events logged so far, leaving the log empty
pub fn drain(log: &Log) -> Vec<Event> {
    log.borrow_mut().drain(..).collect()
}

/// Position of the first event equal to `event`
pub fn position(events: &[Event], event: &Event) -> usize {
    events
        .iter()
        .position(|e| e == event)
        .unwrap_or_else(|| panic!("{event:?} not found in {events:?}"))
}

/// Channel block bytes for the given channel values
pub fn channel_bytes(clear: u16, red: u16, green: u16, blue: u16) -> Vec<u8> {
    [clear, red, green, blue]
        .iter()
        .flat_map(|w| w.to_le_bytes())
        .collect()
}
