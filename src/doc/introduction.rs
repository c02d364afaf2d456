/*!
# Introduction to Tiny Bytecode

Tiny Bytecode is a stack language stripped to the bone. Every opcode is
one character, there are no integer literals, and the program, both
stacks, and all twenty-six variables share one flat 30000-byte memory.
If you have written Forth, you will feel at home; if you haven't, the
whole language fits on one page and you will feel at home in an hour.

Write a program in any text editor and run it:

<pre><code>&nbsp;$ tbc hello.tbc
</code></pre>

A program is a stream of characters executed left to right. A `#`
starts a comment that runs to the end of the line. The machine stops
when it reaches a `^`. Everything the machine does not recognize is
ignored, so you may lay out your source freely.

The twenty-six variables are the lowercase letters. A bare letter does
not produce the variable's value; it produces the variable's *address*,
which is how Forth treats words that name storage. `!` stores a value
at an address and `@` fetches one back:

<pre><code>&nbsp;,a!   # read a key, store it in a
&nbsp;a@.   # fetch a, emit it
&nbsp;^
</code></pre>

With no literals in the language, values come from four places: the
keyboard (`,`), memory (`@`), label addresses (`$`), and arithmetic on
those. A label is declared with `:` and one letter, and `$x` pushes the
address just past the label `:x`. Subtracting two label addresses is
the idiom for making small constants:

<pre><code>&nbsp;$b$a-   # pushes 2: the labels sit two bytes apart
&nbsp;...
&nbsp;:a:b
</code></pre>

Labels also drive control flow. `&` calls a subroutine whose address is
on the stack and `;` returns from it. `?` pops a target and a
condition and jumps when the condition is positive:

<pre><code>&nbsp;$s&amp;     # call the subroutine at :s
&nbsp;^
&nbsp;:s
&nbsp;,.;     # echo one key, return
</code></pre>

Run with `--trace` to watch the machine work: each line shows the
program counter, the opcode, and both stacks. CTRL-C interrupts a
running program with a `BREAK`.

The rest of this manual is reference material. Chapter 1 describes the
memory map and every opcode.

*/
