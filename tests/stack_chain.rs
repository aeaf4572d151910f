//! A three-level adapter chain: one bound on the outermost stack reaches
//! every capability underneath through the generated blanket impls.

use adapter_stack::adapter;

trait Logger {
    fn log(&self, message: &str) -> usize;
}

trait Clock {
    fn now(&self) -> u64;
}

trait Mailer {
    fn send(&self, to: &str, body: &str) -> bool;
}

#[adapter(Logger::Stack)]
trait StdoutLogger: Logger {}

#[adapter(Clock::Stack)]
trait SystemClock: Clock + StdoutLogger {}

// Clone is a marker parent and must not show up in the stack bounds.
#[adapter(Mailer::Stack)]
trait SmtpMailer: Mailer + SystemClock + Clone {}

#[derive(Clone)]
struct Harness;

impl Logger for Harness {
    fn log(&self, message: &str) -> usize {
        message.len()
    }
}

impl Clock for Harness {
    fn now(&self) -> u64 {
        1_724_371_200
    }
}

impl Mailer for Harness {
    fn send(&self, to: &str, _body: &str) -> bool {
        !to.is_empty()
    }
}

impl StdoutLogger for Harness {}
impl SystemClock for Harness {}
impl SmtpMailer for Harness {}

// One bound, whole stack: Mailer + Clock + Logger all reachable.
fn deliver<M: SmtpMailerStack>(mailer: &M) -> (usize, u64, bool) {
    (
        mailer.log("sending"),
        mailer.now(),
        mailer.send("ops@example.com", "ping"),
    )
}

fn tick<C: SystemClockStack>(clock: &C) -> u64 {
    clock.log("tick");
    clock.now()
}

#[test]
fn blanket_impl_covers_a_full_provider() {
    let (logged, now, sent) = deliver(&Harness);
    assert_eq!(logged, "sending".len());
    assert_eq!(now, 1_724_371_200);
    assert!(sent);
}

#[test]
fn inner_stacks_are_usable_on_their_own() {
    assert_eq!(tick(&Harness), 1_724_371_200);
}

#[test]
fn stacks_cover_unsized_providers() {
    // The blanket impl keeps ?Sized, so a trait object is itself a stack.
    fn log_stack<L: StdoutLoggerStack + ?Sized>(logger: &L) -> usize {
        logger.log("dyn")
    }
    let harness = Harness;
    let object: &dyn StdoutLogger = &harness;
    assert_eq!(log_stack(&harness), 3);
    assert_eq!(log_stack(object), 3);
}
