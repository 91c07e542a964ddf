// src/i18n/mod.rs  -  Multi-language string tables
use std::collections::HashMap;

/// All user-visible strings referenced by key
pub trait Lang {
    fn get<'a>(&self, key: &'a str) -> &'a str;
    fn name(&self) -> &str;
}

/// Central i18n registry
pub struct I18n {
    inner: Box<dyn Lang>,
}

impl I18n {
    pub fn new(lang: &str) -> Self {
        let inner: Box<dyn Lang> = match lang {
            "de" => Box::new(De::new()),
            "fr" => Box::new(Fr::new()),
            "it" => Box::new(It::new()),
            _    => Box::new(En::new()),
        };
        Self { inner }
    }
    pub fn t<'a>(&self, key: &'a str) -> &'a str { self.inner.get(key) }
    pub fn lang_name(&self) -> &str    { self.inner.name() }

    pub fn on_off(&self, on: bool) -> &'static str {
        if on { self.t("state.on") } else { self.t("state.off") }
    }
}

// ── Helper macro ──────────────────────────────────────────────────────────────
macro_rules! lang_map {
    ($name:ident, $display:literal, [ $( $k:literal => $v:literal ),* $(,)? ]) => {
        pub struct $name(HashMap<&'static str, &'static str>);
        impl $name {
            pub fn new() -> Self {
                let mut m = HashMap::new();
                $( m.insert($k, $v); )*
                Self(m)
            }
        }
        impl Lang for $name {
            fn get<'a>(&self, key: &'a str) -> &'a str {
                self.0.get(key).copied().unwrap_or(key)
            }
            fn name(&self) -> &str { $display }
        }
    };
}

// ── English ───────────────────────────────────────────────────────────────────
lang_map!(En, "English", [
    "app.title"       => "Morse Code Trainer",
    "app.tip1"        => "Practice 15 mins/day for 5-6 weeks to learn Morse!",
    "app.tip2"        => "Use a straight key and oscillator for best results.",
    "app.goodbye"     => "Exiting program. Goodbye!",
    "menu.week"       => "Week",
    "menu.all"        => "All characters",
    "menu.words"      => "Random words",
    "menu.sentences"  => "Random sentences",
    "menu.callsigns"  => "Call signs",
    "menu.custom"     => "Enter custom text",
    "menu.freq"       => "Adjust frequency",
    "menu.wpm"        => "Set WPM (words per minute)",
    "menu.display"    => "Toggle Morse display",
    "menu.flash"      => "Toggle flash-card mode",
    "menu.voice"      => "Toggle voice",
    "menu.exit"       => "Exit",
    "menu.choice"     => "Enter choice",
    "menu.invalid"    => "Invalid choice.",
    "label.frequency" => "Frequency",
    "label.wpm"       => "WPM",
    "label.display"   => "Display",
    "label.flash"     => "Flash card",
    "label.voice"     => "Voice",
    "label.language"  => "Language",
    "state.on"        => "ON",
    "state.off"       => "OFF",
    "prompt.freq"     => "Enter new frequency (400-1000 Hz): ",
    "prompt.wpm"      => "Enter WPM (5-40): ",
    "prompt.text"     => "Enter text: ",
    "msg.freq_set"    => "Frequency set to",
    "msg.wpm_set"     => "WPM set to",
    "msg.save_failed" => "Could not save settings",
    "msg.no_voice"    => "No speech backend available; nothing will be spoken.",
    "msg.display_now" => "Morse code display is now",
    "msg.flash_now"   => "Flash-card mode is now",
    "msg.voice_now"   => "Voice is now",
    "play.sending"    => "Sending",
    "play.space"      => "Space (between words)",
    "play.skip"       => "Skipping unsupported character",
    "play.paused"     => "Paused. Press Enter to resume, or q to stop.",
    "play.resumed"    => "Resumed.",
    "play.hint"       => "Enter = pause   q / Esc / Ctrl-C = back to menu",
    "play.stopped"    => "Stopped.",
]);

// ── German ────────────────────────────────────────────────────────────────────
lang_map!(De, "Deutsch", [
    "app.title"       => "Morsecode-Trainer",
    "app.tip1"        => "Übe 15 Minuten täglich, 5-6 Wochen lang, um Morse zu lernen!",
    "app.tip2"        => "Mit Handtaste und Oszillator gelingt es am besten.",
    "app.goodbye"     => "Programm wird beendet. Auf Wiedersehen!",
    "menu.week"       => "Woche",
    "menu.all"        => "Alle Zeichen",
    "menu.words"      => "Zufällige Wörter",
    "menu.sentences"  => "Zufällige Sätze",
    "menu.callsigns"  => "Rufzeichen",
    "menu.custom"     => "Eigenen Text eingeben",
    "menu.freq"       => "Tonhöhe ändern",
    "menu.wpm"        => "Tempo setzen (WPM)",
    "menu.display"    => "Morseanzeige umschalten",
    "menu.flash"      => "Karteikarten-Modus umschalten",
    "menu.voice"      => "Sprachausgabe umschalten",
    "menu.exit"       => "Beenden",
    "menu.choice"     => "Auswahl",
    "menu.invalid"    => "Ungültige Auswahl.",
    "label.frequency" => "Tonhöhe",
    "label.wpm"       => "WPM",
    "label.display"   => "Anzeige",
    "label.flash"     => "Karteikarte",
    "label.voice"     => "Sprache",
    "label.language"  => "Sprache der Oberfläche",
    "state.on"        => "AN",
    "state.off"       => "AUS",
    "prompt.freq"     => "Neue Tonhöhe eingeben (400-1000 Hz): ",
    "prompt.wpm"      => "WPM eingeben (5-40): ",
    "prompt.text"     => "Text eingeben: ",
    "msg.freq_set"    => "Tonhöhe gesetzt auf",
    "msg.wpm_set"     => "WPM gesetzt auf",
    "msg.save_failed" => "Einstellungen konnten nicht gespeichert werden",
    "msg.no_voice"    => "Keine Sprachausgabe verfügbar; es wird nichts gesprochen.",
    "msg.display_now" => "Morsecode-Anzeige ist jetzt",
    "msg.flash_now"   => "Karteikarten-Modus ist jetzt",
    "msg.voice_now"   => "Sprachausgabe ist jetzt",
    "play.sending"    => "Sende",
    "play.space"      => "Leerzeichen (Wortabstand)",
    "play.skip"       => "Nicht unterstütztes Zeichen übersprungen",
    "play.paused"     => "Pause. Enter zum Fortsetzen, q zum Beenden.",
    "play.resumed"    => "Weiter.",
    "play.hint"       => "Enter = Pause   q / Esc / Strg-C = zurück zum Menü",
    "play.stopped"    => "Gestoppt.",
]);

// ── French ────────────────────────────────────────────────────────────────────
lang_map!(Fr, "Français", [
    "app.title"       => "Entraîneur Morse",
    "app.tip1"        => "Entraînez-vous 15 min par jour pendant 5-6 semaines !",
    "app.tip2"        => "Un manipulateur droit et un oscillateur donnent les meilleurs résultats.",
    "app.goodbye"     => "Fin du programme. Au revoir !",
    "menu.week"       => "Semaine",
    "menu.all"        => "Tous les caractères",
    "menu.words"      => "Mots aléatoires",
    "menu.sentences"  => "Phrases aléatoires",
    "menu.callsigns"  => "Indicatifs",
    "menu.custom"     => "Saisir un texte",
    "menu.freq"       => "Régler la tonalité",
    "menu.wpm"        => "Régler la vitesse (WPM)",
    "menu.display"    => "Afficher/masquer le code",
    "menu.flash"      => "Mode carte mémoire",
    "menu.voice"      => "Voix on/off",
    "menu.exit"       => "Quitter",
    "menu.choice"     => "Votre choix",
    "menu.invalid"    => "Choix invalide.",
    "label.frequency" => "Tonalité",
    "label.wpm"       => "WPM",
    "label.display"   => "Affichage",
    "label.flash"     => "Carte mémoire",
    "label.voice"     => "Voix",
    "label.language"  => "Langue",
    "state.on"        => "OUI",
    "state.off"       => "NON",
    "prompt.freq"     => "Nouvelle tonalité (400-1000 Hz) : ",
    "prompt.wpm"      => "Vitesse WPM (5-40) : ",
    "prompt.text"     => "Texte : ",
    "msg.freq_set"    => "Tonalité réglée sur",
    "msg.wpm_set"     => "Vitesse réglée sur",
    "msg.save_failed" => "Impossible d'enregistrer les réglages",
    "msg.no_voice"    => "Aucune synthèse vocale disponible.",
    "msg.display_now" => "Affichage du code morse :",
    "msg.flash_now"   => "Mode carte flash :",
    "msg.voice_now"   => "Voix :",
    "play.sending"    => "Émission",
    "play.space"      => "Espace (entre les mots)",
    "play.skip"       => "Caractère non pris en charge ignoré",
    "play.paused"     => "Pause. Entrée pour reprendre, q pour arrêter.",
    "play.resumed"    => "Reprise.",
    "play.hint"       => "Entrée = pause   q / Échap / Ctrl-C = retour au menu",
    "play.stopped"    => "Arrêté.",
]);

// ── Italian ───────────────────────────────────────────────────────────────────
lang_map!(It, "Italiano", [
    "app.title"       => "Allenatore Morse",
    "app.tip1"        => "Esercitati 15 minuti al giorno per 5-6 settimane!",
    "app.tip2"        => "Tasto verticale e oscillatore danno i risultati migliori.",
    "app.goodbye"     => "Uscita dal programma. Arrivederci!",
    "menu.week"       => "Settimana",
    "menu.all"        => "Tutti i caratteri",
    "menu.words"      => "Parole casuali",
    "menu.sentences"  => "Frasi casuali",
    "menu.callsigns"  => "Nominativi",
    "menu.custom"     => "Inserisci testo",
    "menu.freq"       => "Regola tono",
    "menu.wpm"        => "Imposta velocità (WPM)",
    "menu.display"    => "Mostra/nascondi codice",
    "menu.flash"      => "Modalità flash card",
    "menu.voice"      => "Voce on/off",
    "menu.exit"       => "Esci",
    "menu.choice"     => "Scelta",
    "menu.invalid"    => "Scelta non valida.",
    "label.frequency" => "Tono",
    "label.wpm"       => "WPM",
    "label.display"   => "Visualizzazione",
    "label.flash"     => "Flash card",
    "label.voice"     => "Voce",
    "label.language"  => "Lingua",
    "state.on"        => "SÌ",
    "state.off"       => "NO",
    "prompt.freq"     => "Nuovo tono (400-1000 Hz): ",
    "prompt.wpm"      => "Velocità WPM (5-40): ",
    "prompt.text"     => "Testo: ",
    "msg.freq_set"    => "Tono impostato a",
    "msg.wpm_set"     => "Velocità impostata a",
    "msg.save_failed" => "Impossibile salvare le impostazioni",
    "msg.no_voice"    => "Nessuna sintesi vocale disponibile.",
    "msg.display_now" => "Visualizzazione del codice Morse ora",
    "msg.flash_now"   => "Modalità flash card ora",
    "msg.voice_now"   => "Voce ora",
    "play.sending"    => "Trasmissione",
    "play.space"      => "Spazio (tra le parole)",
    "play.skip"       => "Carattere non supportato saltato",
    "play.paused"     => "Pausa. Invio per riprendere, q per fermare.",
    "play.resumed"    => "Ripresa.",
    "play.hint"       => "Invio = pausa   q / Esc / Ctrl-C = torna al menu",
    "play.stopped"    => "Fermato.",
]);
