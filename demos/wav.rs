use phasor::{FixedGain, Fm, Mix, Pulse, Signal, Sine};

const RATE: u32 = 44100;
const NOTE_SECS: u32 = 1;
const FRAME_SIZE: usize = 512;

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| "phasor.wav".into());

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();

    // Plain sine, a square at the octave below, a two-operator bell, then a sine with two
    // harmonics
    write_note(&mut writer, FixedGain::new(Sine::new(440.0, RATE), -6.0));
    write_note(&mut writer, FixedGain::new(Pulse::new(220.0, 0.5, RATE), -12.0));
    write_note(&mut writer, FixedGain::new(Fm::new(280.0, 0.2, 200.0, RATE), -6.0));
    write_note(
        &mut writer,
        Mix::new(
            FixedGain::from_ratio(Sine::new(110.0, RATE), 0.3),
            Mix::new(
                FixedGain::from_ratio(Sine::new(220.0, RATE), 0.4),
                FixedGain::from_ratio(Sine::new(330.0, RATE), 0.3),
            ),
        ),
    );

    writer.finalize().unwrap();
    println!("wrote {}", path);
}

fn write_note<W, S>(writer: &mut hound::WavWriter<W>, mut signal: S)
where
    W: std::io::Write + std::io::Seek,
    S: Signal,
{
    let mut frame = [0.0; FRAME_SIZE];
    let mut remaining = (RATE * NOTE_SECS) as usize;
    while remaining > 0 {
        let n = remaining.min(FRAME_SIZE);
        signal.sample(&mut frame[..n]);
        for &x in &frame[..n] {
            writer.write_sample((x * i16::MAX as f32) as i16).unwrap();
        }
        remaining -= n;
    }
}
