//! Sample-tick composition of a fixed set of control terms.

use vc_core::Precision;

use crate::control::Control;
use crate::process::Process;
use crate::value::Correctable;

/// An ordered, fixed list of control terms sharing one process.
///
/// Terms are evaluated and summed in the order given at construction, so a
/// loop fed the same samples always produces bit-identical output.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlLoop<Q: Correctable> {
    terms: Vec<Control<Q>>,
}

impl<Q: Correctable> ControlLoop<Q> {
    pub fn new(terms: Vec<Control<Q>>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[Control<Q>] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Sum of every term's correction for this sample, as `Q`.
    pub fn correction(&mut self, process: &Process<Q>) -> Q {
        let mut total = Q::zero();
        for (index, term) in self.terms.iter_mut().enumerate() {
            let value = term.apply(process);
            tracing::trace!(index, term = %term.kind(), correction = %value, "term evaluated");
            total += Q::from_correction(value);
        }
        if !total.value().is_finite() {
            tracing::warn!(
                correction = %total,
                duration = %process.duration,
                "non-finite loop correction"
            );
        }
        total
    }

    /// Apply one tick: add the combined correction to the measurement.
    ///
    /// Returns the updated measurement.
    pub fn tick(&mut self, process: &mut Process<Q>) -> Q {
        let correction = self.correction(process);
        process.measurement += correction;
        process.measurement
    }
}

impl<Q: Correctable> FromIterator<Control<Q>> for ControlLoop<Q> {
    fn from_iter<I: IntoIterator<Item = Control<Q>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differential::Differential;
    use crate::gain::Gain;
    use crate::integral::Integral;
    use crate::proportional::Proportional;
    use crate::time::Time;
    use std::io;
    use std::sync::{Arc, Mutex};
    use vc_core::{Pressure, cm_h2o};

    /// Log sink shared between a test and its subscriber.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn unit_loop() -> ControlLoop<Pressure> {
        let target = cm_h2o(1.0);
        vec![
            Control::from(Proportional::new(Gain::new(1.0), target)),
            Control::from(Integral::new(Gain::new(1.0), target)),
            Control::from(Differential::new(Gain::new(1.0), target)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn correction_sums_all_terms() {
        let mut lp = unit_loop();
        let process = Process::new(cm_h2o(0.0), Time::seconds(1.0));
        // P = 1, I = 1, D = 1
        assert_eq!(lp.correction(&process), cm_h2o(3.0));
        // P = 1, I = 2, D = 0
        assert_eq!(lp.correction(&process), cm_h2o(3.0));
        // P = 1, I = 3, D = 0
        assert_eq!(lp.correction(&process), cm_h2o(4.0));
    }

    #[test]
    fn tick_updates_measurement() {
        let target = cm_h2o(1.0);
        let mut lp = ControlLoop::new(vec![Proportional::new(Gain::new(0.5), target).into()]);
        let mut process = Process::new(cm_h2o(0.0), Time::millis(1.0));

        assert_eq!(lp.tick(&mut process), cm_h2o(0.5));
        assert_eq!(lp.tick(&mut process), cm_h2o(0.75));
        assert_eq!(process.measurement, cm_h2o(0.75));
    }

    #[test]
    fn empty_loop_corrects_nothing() {
        let mut lp = ControlLoop::<Pressure>::new(Vec::new());
        let mut process = Process::new(cm_h2o(2.0), Time::seconds(1.0));
        assert!(lp.is_empty());
        assert_eq!(lp.tick(&mut process), cm_h2o(2.0));
    }

    #[test]
    fn zero_duration_reaches_measurement() {
        let mut lp = unit_loop();
        let mut process = Process::new(cm_h2o(0.0), Time::seconds(0.0));
        assert!(!lp.tick(&mut process).value().is_finite());
    }

    #[test]
    fn non_finite_correction_warns_once_per_tick() {
        let captured = Captured::default();
        let sink = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut finite = unit_loop();
            finite.tick(&mut Process::new(cm_h2o(0.0), Time::seconds(1.0)));

            let mut lp = unit_loop();
            let mut process = Process::new(cm_h2o(0.0), Time::seconds(0.0));
            lp.tick(&mut process);
            lp.tick(&mut process);
        });

        let logs = captured.contents();
        assert_eq!(logs.matches("non-finite loop correction").count(), 2);
        assert_eq!(logs.matches("WARN").count(), 2);
    }

    #[test]
    fn terms_keep_declared_order() {
        let lp = unit_loop();
        let kinds: Vec<_> = lp.terms().iter().map(Control::kind).collect();
        assert_eq!(
            kinds,
            vec![
                crate::TermKind::Proportional,
                crate::TermKind::Integral,
                crate::TermKind::Differential
            ]
        );
        assert_eq!(lp.len(), 3);
    }
}
