use std::io::{self, Write};

use crate::{pos, Pos};

/// off-screen character buffer, anything drawn outside of it is dropped.
#[derive(Debug, Clone)]
pub struct Canvas {
    chars: Vec<char>,
    width: usize,
    height: usize,
}

impl Canvas {
    pub fn from_screen() -> io::Result<Self> {
        let (width, height) = termion::terminal_size()?;
        Ok(Self::new(width as usize, height as usize))
    }

    pub fn new(width: usize, height: usize) -> Self {
        Self {
            chars: vec![' '; width * height],
            width,
            height,
        }
    }

    pub fn put(&mut self, Pos { x, y }: Pos, char: char) {
        if (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y) {
            self.chars[y as usize * self.width + x as usize] = char;
        }
    }

    pub fn text(&mut self, origin: Pos, text: &str) {
        for (dy, line) in text.lines().enumerate() {
            for (dx, char) in line.chars().enumerate() {
                self.put(origin + pos!(dx as i32, dy as i32), char);
            }
        }
    }

    pub fn layer(&mut self, f: impl Fn(Pos) -> Option<char>) {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if let Some(char) = f(pos!(x, y)) {
                    self.put(pos!(x, y), char);
                }
            }
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.chars
            .chunks(self.width.max(1))
            .map(|line| line.iter().collect())
    }

    pub fn display(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", termion::clear::All)?;
        for (index, line) in self.lines().enumerate() {
            let goto = termion::cursor::Goto(1, index as u16 + 1);
            write!(out, "{goto}{line}")?;
        }
        out.flush()
    }
}
