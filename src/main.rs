use clap::{arg, Command};
use rand::{thread_rng, Rng};

use adf_dsp::export::write_run_csv;
use adf_dsp::nlms::{Adaptation, NlmsAdf, NlmsConfig};
use adf_dsp::signal::{demo_target, generate_signal, SignalType};
use adf_dsp::utils::{mean_square_error, sig_to_noise_ratio_db};
use adf_dsp::wav::{read_wav, save_wav};

mod test;
use test::run_sweep;

fn main() {
    let matches = Command::new("NLMS Adaptive Filter CLI")
        .version("1.0")
        .about("CLI for online NLMS adaptive filtering and signal generation")
        .subcommand(
            Command::new("demo")
                .about("Run the online NLMS demo on a synthetic desired signal")
                .arg(arg!(--"seed" <SEED> "Seed for the RNG (random if omitted)"))
                .arg(arg!(-o --"out-file" <FILE> "Output CSV path").default_value("nlms_demo.csv")),
        )
        .subcommand(
            Command::new("nlms")
                .about("Online NLMS adaptive filtering of a desired-signal WAV")
                .arg(arg!(-d --"desired" <FILE> "Desired signal WAV").required(true))
                .arg(arg!(-a --"alpha" <ALPHA> "Step size, 0 < alpha < 2").default_value("1.0"))
                .arg(arg!(-u --"updates" <K> "Update iterations per sample").default_value("2"))
                .arg(arg!(-t --"threshold" <TAU> "Early-stop error threshold").default_value("0.01"))
                .arg(arg!(-f --"filt-size" <N> "Filter size").default_value("16"))
                .arg(arg!(--"seed" <SEED> "Seed for the RNG (random if omitted)"))
                .arg(arg!(--"reset" "Redraw filter state before every sample"))
                .arg(arg!(-o --"out-file" <OUT> "Output CSV path").default_value("nlms.csv"))
                .arg(arg!(-w --"wav-out" <WAV> "Optional filtered-output WAV path")),
        )
        .subcommand(
            Command::new("sig-gen")
                .about("Generate signal and save to WAV")
                .arg(arg!(-t --"type" <TYPE> "Signal type, e.g., white|sine,440.0|chirp,200,800").required(true))
                .arg(arg!(-n --"samples" <NUM> "Number of samples").default_value("44100"))
                .arg(arg!(-r --"rate" <SR> "Sample rate in Hz").default_value("44100"))
                .arg(arg!(-o --"out-file" <FILE> "Output WAV path").default_value("signal.wav")),
        )
        .subcommand(
            Command::new("sweep")
                .about("Run a parameter sweep and record MSE/SNR per configuration")
                .arg(arg!(-o --"out-file" <FILE> "Results CSV path").default_value("results.csv")),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("demo", m)) => handle_demo(m),
        Some(("nlms", m)) => handle_nlms(m),
        Some(("sig-gen", m)) => handle_sig_gen(m),
        Some(("sweep", m)) => run_sweep(m.get_one::<String>("out-file").unwrap()).unwrap(),
        _ => eprintln!("Unknown command. Use --help."),
    }
}

fn parse_seed(m: &clap::ArgMatches) -> u64 {
    match m.get_one::<String>("seed") {
        Some(s) => s.parse().expect("Invalid seed"),
        None => thread_rng().gen(),
    }
}

fn handle_demo(m: &clap::ArgMatches) {
    let out_file = m.get_one::<String>("out-file").unwrap();
    let seed = parse_seed(m);

    let d = demo_target(256, seed);
    let config = NlmsConfig {
        alpha: 1.0,
        update_count: 2,
        threshold: 0.01,
        taps: 16,
        adaptation: Adaptation::Cumulative,
    };
    let mut adf = NlmsAdf::new(config, seed).unwrap_or_else(|e| panic!("{}", e));
    let out = adf.run(&d);

    write_run_csv(&d, &out, out_file).unwrap();
    println!(
        "NLMS demo (seed {}): mse={:.6}, snr={:.2} dB -> {}",
        seed,
        mean_square_error(&d, &out),
        sig_to_noise_ratio_db(&d, &out),
        out_file
    );
}

fn handle_nlms(m: &clap::ArgMatches) {
    let (desired, sample_rate) = read_wav(m.get_one::<String>("desired").unwrap()).unwrap();
    let alpha: f64 = m.get_one::<String>("alpha").unwrap().parse().unwrap();
    let updates: usize = m.get_one::<String>("updates").unwrap().parse().unwrap();
    let threshold: f64 = m.get_one::<String>("threshold").unwrap().parse().unwrap();
    let taps: usize = m.get_one::<String>("filt-size").unwrap().parse().unwrap();
    let seed = parse_seed(m);
    let out_path = m.get_one::<String>("out-file").unwrap();

    let adaptation = if *m.get_one::<bool>("reset").unwrap() {
        Adaptation::PerSampleReset
    } else {
        Adaptation::Cumulative
    };

    let config = NlmsConfig {
        alpha,
        update_count: updates,
        threshold,
        taps,
        adaptation,
    };
    let mut adf = NlmsAdf::new(config, seed).unwrap_or_else(|e| panic!("{}", e));
    let out = adf.run(&desired);

    write_run_csv(&desired, &out, out_path).unwrap();
    if let Some(wav_path) = m.get_one::<String>("wav-out") {
        save_wav(&out, wav_path, sample_rate).unwrap();
    }
    println!(
        "NLMS done (seed {}): mse={:.6}, snr={:.2} dB -> {}",
        seed,
        mean_square_error(&desired, &out),
        sig_to_noise_ratio_db(&desired, &out),
        out_path
    );
}

fn handle_sig_gen(m: &clap::ArgMatches) {
    let sig_type = m.get_one::<String>("type").unwrap();
    let samples: usize = m.get_one::<String>("samples").unwrap().parse().unwrap();
    let rate: u32 = m.get_one::<String>("rate").unwrap().parse().unwrap();
    let out_file = m.get_one::<String>("out-file").unwrap();

    let st = parse_signal_type(sig_type);
    let sig = generate_signal(samples, st, rate as f64);
    save_wav(&sig, out_file, rate).unwrap();
    println!("Generated {} samples of {} -> {}", samples, sig_type, out_file);
}

fn parse_signal_type(s: &str) -> SignalType {
    let s = s.to_lowercase();
    if s == "white" {
        SignalType::WhiteNoise
    } else if s.starts_with("sine,") {
        let f = s["sine,".len()..].parse().unwrap();
        SignalType::Sinusoidal(f)
    } else if s.starts_with("chirp,") {
        let parts: Vec<f64> = s["chirp,".len()..].split(',').map(|x| x.parse().unwrap()).collect();
        SignalType::Chirp(parts[0], parts[1])
    } else {
        panic!("Unknown type: {}", s)
    }
}
